use actix_web::{delete, get, http::header, post, put, web, HttpResponse, Responder};
use serde::Serialize;

use crate::{
    consts::consts::PersonId,
    model::person::{NewPerson, UpdatePersonData},
    store::{
        request_manager::{RequestManager, RequestManagerError},
        table::table::ApplyErrors,
    },
};

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Registers the person resource routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(list_people)
        .service(get_person)
        .service(create_person)
        .service(update_person)
        .service(delete_person);
}

#[get("/people")]
pub async fn list_people(request_manager: web::Data<RequestManager>) -> impl Responder {
    match request_manager.send_list() {
        Ok(people) => HttpResponse::Ok().json(people),
        Err(e) => store_failure(e),
    }
}

#[get("/people/{id}")]
pub async fn get_person(
    path: web::Path<i64>,
    request_manager: web::Data<RequestManager>,
) -> impl Responder {
    let id = PersonId(path.into_inner());

    match request_manager.send_get(id) {
        Ok(Some(person)) => HttpResponse::Ok().json(person),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => store_failure(e),
    }
}

/// The body deserializes to None when the caller sends a JSON `null`, the one
/// validation failure this resource models
#[post("/people")]
pub async fn create_person(
    body: web::Json<Option<NewPerson>>,
    request_manager: web::Data<RequestManager>,
) -> impl Responder {
    let new_person = match body.into_inner() {
        Some(new_person) => new_person,
        None => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("A person payload is required"))
        }
    };

    match request_manager.send_add(new_person.to_person()) {
        Ok(person) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/people/{}", person.id)))
            .json(person),
        Err(RequestManagerError::Statement(ApplyErrors::CannotCreateWhenAlreadyExists(id))) => {
            HttpResponse::Conflict().json(ErrorResponse::new(format!(
                "A person already exists with id {}",
                id
            )))
        }
        Err(e) => store_failure(e),
    }
}

#[put("/people/{id}")]
pub async fn update_person(
    path: web::Path<i64>,
    body: web::Json<UpdatePersonData>,
    request_manager: web::Data<RequestManager>,
) -> impl Responder {
    // The path id is authoritative, any id in the payload is ignored
    let id = PersonId(path.into_inner());

    match request_manager.send_update(id, body.into_inner()) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(RequestManagerError::Statement(ApplyErrors::CannotUpdateDoesNotExist(_))) => {
            HttpResponse::NotFound().finish()
        }
        Err(e) => store_failure(e),
    }
}

#[delete("/people/{id}")]
pub async fn delete_person(
    path: web::Path<i64>,
    request_manager: web::Data<RequestManager>,
) -> impl Responder {
    let id = PersonId(path.into_inner());

    match request_manager.send_remove(id) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(RequestManagerError::Statement(ApplyErrors::CannotDeleteDoesNotExist(_))) => {
            HttpResponse::NotFound().finish()
        }
        Err(e) => store_failure(e),
    }
}

fn store_failure(e: RequestManagerError) -> HttpResponse {
    log::error!("Store request failed: {}", e);

    HttpResponse::InternalServerError()
        .json(ErrorResponse::new("The store failed to process the request"))
}
