use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(ToSchema)]
pub struct StudentDoc {
    pub first_name: String,
    pub last_name: String,
    #[schema(default = "")]
    pub middle_name: Option<String>,
    pub age: i64,
    pub city: String,
}

#[derive(ToSchema)]
pub struct StudentResponseDoc {
    pub student_id: i64,
    pub student: StudentDoc,
}

#[derive(ToSchema)]
pub struct StudentsResponseDoc {
    pub students: Vec<StudentDoc>,
}

#[derive(ToSchema)]
pub struct ClassDoc {
    pub class_name: String,
    pub description: String,
    #[schema(format = Date, example = "2024-01-01")]
    pub start_date: String,
    #[schema(format = Date, example = "2024-06-01")]
    pub end_date: String,
    pub hours: i64,
}

#[derive(ToSchema)]
pub struct ClassResponseDoc {
    pub class_id: i64,
    pub class: ClassDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::create_student,
        crate::routes::students::update_student,
        crate::routes::students::delete_student,
        crate::routes::classes::create_class,
        crate::routes::classes::update_class,
        crate::routes::classes::delete_class,
        crate::routes::classes::register_student,
        crate::routes::classes::list_students_in_class,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponseDoc,
            StudentDoc,
            StudentResponseDoc,
            StudentsResponseDoc,
            ClassDoc,
            ClassResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students"),
        (name = "classes")
    )
)]
pub struct ApiDoc;
