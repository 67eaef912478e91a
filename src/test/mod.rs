mod delete;
mod layout;
mod list_view;
mod utils;
