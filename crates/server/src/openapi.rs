use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc {
    #[schema(example = "OK")]
    pub status: String,
}

#[derive(ToSchema)]
pub struct ServiceInfoDoc {
    #[schema(example = "Account REST API Service")]
    pub name: String,
    #[schema(example = "1.0")]
    pub version: String,
}

#[derive(ToSchema)]
pub struct AccountDoc {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    #[schema(example = "2024-01-31")]
    pub date_joined: String,
}

#[derive(ToSchema)]
pub struct AccountInputDoc {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: Option<String>,
    /// Defaults to the current date on create; kept when omitted on update.
    #[schema(example = "2024-01-31")]
    pub date_joined: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    #[schema(example = "Account not found")]
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Account REST API Service", version = "1.0"),
    paths(
        crate::routes::health,
        crate::routes::index,
        crate::routes::accounts::create,
        crate::routes::accounts::list,
        crate::routes::accounts::read,
        crate::routes::accounts::update,
        crate::routes::accounts::delete,
    ),
    components(
        schemas(
            HealthDoc,
            ServiceInfoDoc,
            AccountDoc,
            AccountInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "accounts")
    )
)]
pub struct ApiDoc;
