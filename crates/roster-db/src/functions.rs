//! Bindings for database-side SQL functions used in projections and filters.

use diesel::define_sql_function;
use diesel::sql_types::{Nullable, Text};

define_sql_function! {
    /// SQLite `replace(X, Y, Z)`: every occurrence of `Y` in `X` becomes `Z`.
    /// NULL input yields NULL output.
    fn replace(input: Nullable<Text>, pattern: Text, replacement: Text) -> Nullable<Text>;
}

define_sql_function! {
    /// SQLite `lower(X)` with NULL passthrough.
    fn lower(input: Nullable<Text>) -> Nullable<Text>;
}
