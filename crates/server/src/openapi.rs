use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Body of POST/PUT `/services`. Spanish aliases `nombre`, `direccion`,
/// `descripcion` are accepted as well.
#[derive(ToSchema)]
pub struct ServiceInputDoc { pub name: String, pub address: String, pub description: String }

/// One entry of GET `/services`.
#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub nombre: String,
    pub direccion: String,
    pub lat: f64,
    pub lon: f64,
    pub descripcion: String,
}

#[derive(ToSchema)]
pub struct CreatedServiceDoc { pub id: i32, pub lat: f64, pub lon: f64 }

/// Body of POST `/requests`. Aliases `usuario`, `servicio` are accepted.
#[derive(ToSchema)]
pub struct RequestInputDoc { pub user: String, pub service: String }

#[derive(ToSchema)]
pub struct RequestDoc { pub id: i32, pub usuario: String, pub servicio: String }

#[derive(ToSchema)]
pub struct CreatedRequestDoc { pub id: i32, pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::services::update,
        crate::routes::services::delete,
        crate::routes::requests::list,
        crate::routes::requests::create,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceInputDoc,
            ServiceDoc,
            CreatedServiceDoc,
            RequestInputDoc,
            RequestDoc,
            CreatedRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services"),
        (name = "requests")
    )
)]
pub struct ApiDoc;
