pub use ActiveValue::{NotSet, Set, Unchanged};

/// The state of a field in an [ActiveModel][crate::satellite::ActiveModel].
///
/// There are three possible states represented by three enum variants:
///
/// - [Set] - a value that's explicitly provided by the caller.
/// - [Unchanged] - an existing, unchanged value read back from the store.
/// - [NotSet] - an undefined value (the field was absent from the payload).
///
/// The difference between [Set] and [Unchanged] is what tells a patch apart from
/// a record that was merely read; [NotSet] is what the validator rejects.
///
/// # Examples
///
/// ```
/// use satellite_service::{ActiveValue, satellite};
///
/// // `id` is assigned by the store, so a create payload leaves it `NotSet`.
/// let payload = satellite::ActiveModel {
///     id: ActiveValue::NotSet,
///     name: ActiveValue::Set("Sputnik".to_owned()),
///     lat: ActiveValue::Set(12.5),
///     lon: ActiveValue::Set(-41.0),
///     status: ActiveValue::Set("nominal".to_owned()),
/// };
/// assert!(payload.name.is_set());
/// assert!(payload.id.is_not_set());
/// ```
#[derive(Clone, Debug)]
pub enum ActiveValue<V> {
    /// A value that's explicitly set by the caller.
    ///
    /// When editing an existing value, you can use [set_if_not_equals][ActiveValue::set_if_not_equals]
    /// to preserve the [Unchanged] state when the new value is the same as the old one.
    Set(V),
    /// An existing, unchanged value from the store.
    ///
    /// You get these when you convert a stored [Model][crate::satellite::Model]
    /// into an [ActiveModel][crate::satellite::ActiveModel].
    Unchanged(V),
    /// An undefined value.
    ///
    /// When you create a new [ActiveModel][crate::satellite::ActiveModel],
    /// its fields are [NotSet][ActiveValue::NotSet] by default.
    NotSet,
}

impl<V> Default for ActiveValue<V> {
    /// Create an [ActiveValue::NotSet]
    fn default() -> Self {
        Self::NotSet
    }
}

impl<V> ActiveValue<V> {
    /// Check if the [ActiveValue] is [ActiveValue::Set]
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Check if the [ActiveValue] is [ActiveValue::Unchanged]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged(_))
    }

    /// Check if the [ActiveValue] is [ActiveValue::NotSet]
    pub fn is_not_set(&self) -> bool {
        matches!(self, Self::NotSet)
    }

    /// Take ownership of the inner value, also setting self to `NotSet`
    pub fn take(&mut self) -> Option<V> {
        match std::mem::take(self) {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => Some(value),
            ActiveValue::NotSet => None,
        }
    }

    /// Take ownership of the inner value, consuming self
    pub fn into_value(self) -> Option<V> {
        match self {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => Some(value),
            ActiveValue::NotSet => None,
        }
    }

    /// Reset the value from [ActiveValue::Unchanged] to [ActiveValue::Set],
    /// leaving [ActiveValue::NotSet] untouched.
    pub fn reset(&mut self) {
        *self = match self.take() {
            Some(value) => ActiveValue::Set(value),
            None => ActiveValue::NotSet,
        };
    }

    /// `Set(value)`, except when [`self.is_unchanged()`][ActiveValue#method.is_unchanged]
    /// and `value` equals the current [Unchanged][ActiveValue::Unchanged] value.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use satellite_service::ActiveValue;
    /// #
    /// let mut value = ActiveValue::Unchanged("old");
    ///
    /// value.set_if_not_equals("old");
    /// assert!(value.is_unchanged());
    ///
    /// value.set_if_not_equals("new");
    /// assert_eq!(value, ActiveValue::Set("new"));
    /// ```
    pub fn set_if_not_equals(&mut self, value: V)
    where
        V: PartialEq,
    {
        match self {
            ActiveValue::Unchanged(current) if &value == current => {}
            _ => *self = ActiveValue::Set(value),
        }
    }

    /// Get the inner value, unless `self` is [NotSet][ActiveValue::NotSet].
    ///
    /// ## Examples
    ///
    /// ```
    /// # use satellite_service::ActiveValue;
    /// #
    /// assert_eq!(ActiveValue::Unchanged(42).try_as_ref(), Some(&42));
    /// assert_eq!(ActiveValue::Set(42).try_as_ref(), Some(&42));
    /// assert_eq!(ActiveValue::NotSet.try_as_ref(), None::<&i32>);
    /// ```
    pub fn try_as_ref(&self) -> Option<&V> {
        match self {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => Some(value),
            ActiveValue::NotSet => None,
        }
    }
}

impl<V> PartialEq for ActiveValue<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ActiveValue::Set(l), ActiveValue::Set(r)) => l == r,
            (ActiveValue::Unchanged(l), ActiveValue::Unchanged(r)) => l == r,
            (ActiveValue::NotSet, ActiveValue::NotSet) => true,
            _ => false,
        }
    }
}
