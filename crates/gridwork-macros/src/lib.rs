//! Proc macros for gridwork.
//!
//! # Available Macros
//!
//! - [`GridRow`] - Generate field lookup, identity and fingerprint functions
//!   for a row struct
//!
//! # Examples
//!
//! For working examples, see `gridwork/tests/derive.rs`.

mod row;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `GridRow` trait for table row structs.
///
/// This macro generates an implementation of the `GridRow` trait from
/// `gridwork-query`, so a table can read fields by id without serializing
/// the row.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | Text field (`String`, `&str`, or `Option` of either) |
/// | `Number` | Numeric field (any primitive integer or float, or `Option` of one) |
/// | `Timestamp` | Timestamp field, requires a `GridTimestamp` impl |
/// | `Bool` | Boolean field |
/// | `id` | The field's text is the row identity |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Use a custom field id |
///
/// Fields without a `#[grid(...)]` type are not visible to the table.
/// `Option` fields surface `None` as a missing value.
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Field id constants (e.g., `Member::NAME`, `Member::JOINED_AT`)
/// 2. `GridRow::field_value()` matching on field ids
/// 3. `GridRow::row_identity()` when a field is marked `id`
/// 4. `GridRow::row_fingerprint()` over all visible fields
///
/// # Example
///
/// ```ignore
/// use gridwork::{GridRow, Query};
///
/// #[derive(GridRow)]
/// struct Member {
///     #[grid(String, id)]
///     email: String,
///
///     #[grid(String)]
///     name: String,
///
///     #[grid(Number)]
///     age: u32,
///
///     #[grid(Bool)]
///     active: bool,
///
///     #[grid(skip)]
///     password_hash: String,
/// }
///
/// let members = vec![
///     Member { email: "ada@x.io".into(), name: "Ada".into(), age: 36, active: true, password_hash: String::new() },
///     Member { email: "bo@x.io".into(), name: "Bo".into(), age: 19, active: false, password_hash: String::new() },
/// ];
///
/// let query = Query::new().order_desc(Member::AGE).build();
/// let results = query.apply(&members, Member::accessor);
/// assert_eq!(results[0].name, "Ada");
/// assert_eq!(results[0].row_identity(), Some("ada@x.io".to_string()));
/// ```
///
/// # Timestamp Fields
///
/// For timestamp fields, implement `GridTimestamp` on your datetime type:
///
/// ```ignore
/// use gridwork::{GridTimestamp, Timestamp};
///
/// struct JoinedAt(i64);
///
/// impl GridTimestamp for JoinedAt {
///     fn grid_timestamp(&self) -> Timestamp {
///         Timestamp::from_secs(self.0)
///     }
/// }
///
/// #[derive(GridRow)]
/// struct Member {
///     #[grid(Timestamp)]
///     joined_at: JoinedAt,
/// }
/// ```
#[proc_macro_derive(GridRow, attributes(grid))]
pub fn grid_row_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    row::grid_row_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
