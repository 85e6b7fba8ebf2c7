//! The satellite entity: the stored [Model], the id-less [NewModel] handed to the
//! store on insert, and the partial [ActiveModel] every write request arrives as.

use crate::{ActiveValue, NotSet, SatErr, Set, Unchanged};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as Json};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// The largest id the store will ever assign or accept, `2^53 - 1`.
///
/// Ids travel as JSON numbers, and any integer above this bound can no longer be
/// represented exactly by every JSON consumer.
pub const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// A complete satellite record, as held by the store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: u64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub status: String,
}

/// A complete satellite record that has not been assigned an id yet
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewModel {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub status: String,
}

/// A partial satellite, every field of which may be absent
///
/// `id` is kept as the raw JSON number the client sent; it is only narrowed to a
/// `u64` when a patch is validated, so that an out-of-range id can be rejected
/// rather than fail to parse.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveModel {
    pub id: ActiveValue<Number>,
    pub name: ActiveValue<String>,
    pub lat: ActiveValue<f64>,
    pub lon: ActiveValue<f64>,
    pub status: ActiveValue<String>,
}

/// The fields of a satellite
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    Id,
    Name,
    Lat,
    Lon,
    Status,
}

impl Column {
    /// The field name as it appears in a JSON payload
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Every column a complete record must carry besides the id
    pub fn required() -> impl Iterator<Item = Column> {
        Column::iter().filter(|c| *c != Column::Id)
    }
}

impl Model {
    /// A sample record describing the shape clients should send
    pub fn example() -> Self {
        Self {
            id: 101010,
            name: "Sat Name".to_owned(),
            lat: 1234.0,
            lon: 1234.0,
            status: "Example Satus".to_owned(),
        }
    }

    /// Convert into an [ActiveModel] whose fields are all [Unchanged]
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: Unchanged(self.id.into()),
            name: Unchanged(self.name),
            lat: Unchanged(self.lat),
            lon: Unchanged(self.lon),
            status: Unchanged(self.status),
        }
    }
}

impl NewModel {
    /// Attach a store-assigned id
    pub fn into_model(self, id: u64) -> Model {
        Model {
            id,
            name: self.name,
            lat: self.lat,
            lon: self.lon,
            status: self.status,
        }
    }

    /// `name` must not be blank and the coordinates must be finite
    pub fn check_fields(&self) -> Result<(), SatErr> {
        if self.name.trim().is_empty() {
            return Err(invalid(Column::Name, "must not be blank"));
        }
        if !self.lat.is_finite() {
            return Err(invalid(Column::Lat, "must be a finite number"));
        }
        if !self.lon.is_finite() {
            return Err(invalid(Column::Lon, "must be a finite number"));
        }
        Ok(())
    }
}

impl From<Model> for ActiveModel {
    fn from(model: Model) -> Self {
        model.into_active_model()
    }
}

impl From<NewModel> for ActiveModel {
    fn from(model: NewModel) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name),
            lat: Set(model.lat),
            lon: Set(model.lon),
            status: Set(model.status),
        }
    }
}

impl ActiveModel {
    /// Build a payload from a JSON request body.
    ///
    /// Absent and `null` fields become [NotSet]. A field of the wrong JSON type is
    /// rejected, except `id`: anything but a number is dropped, since a create
    /// ignores the id and a patch rejects a missing one anyway.
    pub fn from_json(json: Json) -> Result<Self, SatErr> {
        let Json::Object(mut obj) = json else {
            return Err(SatErr::ValidationRejected(
                "payload is not a JSON object".to_owned(),
            ));
        };

        let mut take = |col: Column| match obj.remove(col.as_str()) {
            None | Some(Json::Null) => None,
            Some(v) => Some(v),
        };

        let id = match take(Column::Id) {
            Some(Json::Number(n)) => Set(n),
            _ => NotSet,
        };
        let name = string_field(Column::Name, take(Column::Name))?;
        let lat = number_field(Column::Lat, take(Column::Lat))?;
        let lon = number_field(Column::Lon, take(Column::Lon))?;
        let status = string_field(Column::Status, take(Column::Status))?;

        Ok(Self {
            id,
            name,
            lat,
            lon,
            status,
        })
    }

    /// Whether any field was explicitly [Set]
    pub fn is_changed(&self) -> bool {
        self.id.is_set()
            || self.name.is_set()
            || self.lat.is_set()
            || self.lon.is_set()
            || self.status.is_set()
    }

    /// Whether the given column is [NotSet]
    pub fn is_not_set(&self, col: Column) -> bool {
        match col {
            Column::Id => self.id.is_not_set(),
            Column::Name => self.name.is_not_set(),
            Column::Lat => self.lat.is_not_set(),
            Column::Lon => self.lon.is_not_set(),
            Column::Status => self.status.is_not_set(),
        }
    }

    /// The required columns this payload is missing, in declaration order
    pub fn missing_columns(&self) -> Vec<Column> {
        Column::required().filter(|c| self.is_not_set(*c)).collect()
    }

    /// Collect the four required fields into a [NewModel], ignoring `id`.
    ///
    /// Fails with [SatErr::ValidationRejected] naming every missing field.
    pub fn try_into_new_model(self) -> Result<NewModel, SatErr> {
        let missing = self.missing_columns();
        if !missing.is_empty() {
            return Err(SatErr::ValidationRejected(format!(
                "missing required field(s): {}",
                missing.iter().map(|c| c.as_str()).join(", ")
            )));
        }
        match (
            self.name.into_value(),
            self.lat.into_value(),
            self.lon.into_value(),
            self.status.into_value(),
        ) {
            (Some(name), Some(lat), Some(lon), Some(status)) => Ok(NewModel {
                name,
                lat,
                lon,
                status,
            }),
            _ => Err(SatErr::ValidationRejected(
                "missing required field(s)".to_owned(),
            )),
        }
    }
}

fn string_field(col: Column, value: Option<Json>) -> Result<ActiveValue<String>, SatErr> {
    match value {
        None => Ok(NotSet),
        Some(Json::String(s)) => Ok(Set(s)),
        Some(other) => Err(wrong_type(col, "a string", &other)),
    }
}

fn number_field(col: Column, value: Option<Json>) -> Result<ActiveValue<f64>, SatErr> {
    match value {
        None => Ok(NotSet),
        Some(Json::Number(n)) => n
            .as_f64()
            .map(Set)
            .ok_or_else(|| wrong_type(col, "a finite number", &Json::Number(n))),
        Some(other) => Err(wrong_type(col, "a number", &other)),
    }
}

fn invalid(col: Column, reason: &str) -> SatErr {
    SatErr::ValidationRejected(format!("`{}` {reason}", col.as_str()))
}

fn wrong_type(col: Column, expected: &str, got: &Json) -> SatErr {
    SatErr::ValidationRejected(format!(
        "`{}` must be {expected}, got `{got}`",
        col.as_str()
    ))
}
