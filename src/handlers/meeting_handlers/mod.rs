pub mod crud;
pub mod forms;
pub mod list;

pub use crud::{create, delete_many, detail};
pub use forms::{DeleteManyForm, MeetingForm};
pub use list::list;
