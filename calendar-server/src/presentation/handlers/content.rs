use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::application::content_service::ContentService;
use crate::data::content_repository::InMemoryContentRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{
    CreateContentRequest, ListContentQuery, ListContentResponse, UpdateContentRequest,
};

#[post("/content")]
pub async fn create_content(
    req: HttpRequest,
    service: web::Data<ContentService<InMemoryContentRepository>>,
    payload: web::Json<CreateContentRequest>,
) -> Result<HttpResponse, DomainError> {
    let item = service.create_content(payload.into_inner().into()).await?;

    info!(
        request_id = %request_id(&req),
        content_id = item.id,
        "content created"
    );

    Ok(HttpResponse::Created().json(item))
}

#[get("/content/{id}")]
pub async fn get_content(
    service: web::Data<ContentService<InMemoryContentRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let item = service.get_content(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

#[get("/content")]
pub async fn list_content(
    req: HttpRequest,
    service: web::Data<ContentService<InMemoryContentRepository>>,
    query: web::Query<ListContentQuery>,
) -> Result<HttpResponse, DomainError> {
    let items = service.list_content(query.into_inner().into()).await?;

    info!(
        request_id = %request_id(&req),
        total = items.len(),
        "content listed"
    );

    Ok(HttpResponse::Ok().json(ListContentResponse {
        total: items.len(),
        content: items,
    }))
}

#[put("/content/{id}")]
pub async fn update_content(
    req: HttpRequest,
    service: web::Data<ContentService<InMemoryContentRepository>>,
    payload: web::Json<UpdateContentRequest>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    let item = service.update_content(id, payload.into_inner().into()).await?;

    info!(
        request_id = %request_id(&req),
        content_id = id,
        "content updated"
    );

    Ok(HttpResponse::Ok().json(item))
}

#[delete("/content/{id}")]
pub async fn delete_content(
    req: HttpRequest,
    service: web::Data<ContentService<InMemoryContentRepository>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let id = path.into_inner();
    service.delete_content(id).await?;

    info!(
        request_id = %request_id(&req),
        content_id = id,
        "content deleted"
    );

    Ok(HttpResponse::NoContent().finish())
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<crate::presentation::middleware::RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}

pub fn scope() -> actix_web::Scope {
    actix_web::web::scope("")
        .service(create_content)
        .service(list_content)
        .service(get_content)
        .service(update_content)
        .service(delete_content)
}
