use crate::{
    ActiveValue::Set,
    satellite::{ActiveModel, Model, NewModel},
};

/// The two satellites a demo store starts with
pub fn seed() -> Vec<NewModel> {
    vec![
        NewModel {
            name: "Sentinel-1A".to_owned(),
            lat: 45.5,
            lon: -122.25,
            status: "nominal".to_owned(),
        },
        NewModel {
            name: "Landsat 8".to_owned(),
            lat: -12.0,
            lon: 33.75,
            status: "degraded".to_owned(),
        },
    ]
}

/// A complete record with the given name and fixed coordinates
pub fn new_model(name: &str) -> NewModel {
    NewModel {
        name: name.to_owned(),
        lat: 1.0,
        lon: 2.0,
        status: "ok".to_owned(),
    }
}

/// A complete create payload with the given name
pub fn create_payload(name: &str) -> ActiveModel {
    ActiveModel::from(new_model(name))
}

/// The payload that overwrites `model` with a new name, every other field carried over
pub fn rename_payload(model: Model, name: &str) -> ActiveModel {
    ActiveModel {
        name: Set(name.to_owned()),
        ..model.into_active_model()
    }
}

