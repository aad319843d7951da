pub mod auth;
pub mod certificate;
pub mod class;
pub mod course;
pub mod enrollment;
pub mod role;
pub mod student;

pub use auth::{StudentLogin, StudentRegister, Token};
pub use certificate::{Certificate, CertificateValidation};
pub use class::{Class, ClassCreate, ClassStudent, ClassUpdate, ClassWithCourse};
pub use course::{ClassSummary, Course, CourseCreate, CourseUpdate, CourseWithClasses};
pub use enrollment::{EnrollmentDetail, EnrollmentResponse};
pub use role::Role;
pub use student::{
    EnrollmentInfo, StudentAuth, StudentCertificate, StudentCertificates, StudentDashboard,
    StudentInfo, StudentProfileUpdate,
};
