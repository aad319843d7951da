//! 按资源划分的类型化接口

mod auth;
mod certificates;
mod classes;
mod courses;
mod enrollments;
mod students;
mod validation;
