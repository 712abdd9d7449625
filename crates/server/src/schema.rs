use db::DbErr;
use serde_json::Value;

use crate::error::AppError;

/// Generate example values for OAPI documentation.
macro_rules! generate_examples {
    ($name:ident, $type:ty, $expr:expr) => {
        ::paste::paste! {
            #[doc = concat!("Generate example [`", stringify!($type), "`] value for OAPI documentation.")]
            pub(crate) fn [<example_ $name>]() -> $type {
                $expr
            }
        }
    };

    ($name:ident, $type:ty, $expr:expr; $($name_repeat:ident, $type_repeat:ty, $expr_repeat:expr);+) => {
        generate_examples!($name, $type, $expr);
        generate_examples!($($name_repeat, $type_repeat, $expr_repeat);+);
    }
}

/// Convert an error into a JSON value suitable for OAPI documentation.
pub(crate) fn example_error(err: AppError) -> Value {
    let (_, body) = err.to_parts();

    serde_json::to_value(body).unwrap_or_default()
}

/// Example database error used in OAPI documentation.
pub(crate) fn example_database_error() -> Value {
    example_error(AppError::Database(DbErr::Custom(String::from(
        "connection refused",
    ))))
}

generate_examples!(
    database_identifier, i64, 1;
    chip_id, i64, 42;
    hd_id, i64, 1500;
    phase_id, i32, 7;
    line, i32, 2;
    timestamp, String, String::from("2023-06-01T12:00:00Z");
    status, String, String::from("STARTED");
    order_status, String, String::from("OPEN");
    user, String, String::from("jdoe");
    comment, String, String::from("Checked brakes and tire pressure.");
    vehicle, String, String::from("Corolla 2021");
    order_number, String, String::from("OS-1500");
    plates, String, String::from("ABC-123");
    tracker_url, String, String::from("https://tracker.example.com/orders/OS-1500")
);
