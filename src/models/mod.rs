pub mod contact;
pub mod entity;
pub mod lead;
pub mod meeting;
pub mod relation;
pub mod setting;
pub mod user;
