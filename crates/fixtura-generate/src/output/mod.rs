pub mod json;

pub use json::{
    categories_as_json, humans_as_json, products_as_json, to_json_pretty, users_as_json,
    write_json,
};
