pub mod entry_form;
pub mod product;
pub mod user;

pub use entry_form::{EntryGroup, FormField, ProductEntryForm};
pub use product::{parse_id_list, BulkDeleteRequest, NewProduct, ProductFilter, ProductRecord};
pub use user::{
    CreatedUser, LoginRequest, LoginResponse, NewUserRequest, RegisterRequest, Role, UserRecord,
};
