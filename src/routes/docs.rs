use actix_web::http::header;
use actix_web::{get, HttpResponse};
use serde_json::{json, Value};

pub const OPENAPI_PATH: &str = "/openapi";

/// Sends the browser to the API description.
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, OPENAPI_PATH))
        .finish()
}

#[get("/openapi")]
pub async fn openapi() -> HttpResponse {
    HttpResponse::Ok().json(document())
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}
    })
}

fn schemas() -> Value {
    json!({
        "NewProduct": {
            "type": "object",
            "required": ["nome", "quantidade", "valor"],
            "properties": {
                "nome": {"type": "string", "minLength": 1, "maxLength": 140},
                "quantidade": {"type": "integer"},
                "valor": {"type": "number"}
            }
        },
        "Comment": {
            "type": "object",
            "properties": {
                "id": {"type": "integer"},
                "texto": {"type": "string"}
            }
        },
        "Product": {
            "type": "object",
            "properties": {
                "id": {"type": "integer"},
                "nome": {"type": "string"},
                "quantidade": {"type": "integer"},
                "valor": {"type": "number"},
                "comentarios": {"type": "array", "items": {"$ref": "#/components/schemas/Comment"}}
            }
        },
        "Listing": {
            "type": "object",
            "properties": {
                "produtos": {"type": "array", "items": {"$ref": "#/components/schemas/Product"}}
            }
        },
        "Error": {
            "type": "object",
            "properties": {"mesage": {"type": "string"}}
        }
    })
}

fn document() -> Value {
    let product = json!({
        "description": "Product with its comments",
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Product"}}}
    });
    let listing = json!({
        "description": "Products listing",
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Listing"}}}
    });

    json!({
        "openapi": "3.0.3",
        "info": {"title": env!("CARGO_PKG_NAME"), "version": env!("CARGO_PKG_VERSION")},
        "tags": [
            {"name": "Produto", "description": "Adição e visualização de produtos à base"}
        ],
        "paths": {
            "/product/add": {
                "post": {
                    "tags": ["Produto"],
                    "summary": "Adiciona um novo produto à base",
                    "requestBody": {
                        "content": {
                            "application/json": {"schema": {"$ref": "#/components/schemas/NewProduct"}},
                            "application/x-www-form-urlencoded": {"schema": {"$ref": "#/components/schemas/NewProduct"}}
                        }
                    },
                    "responses": {
                        "200": product,
                        "400": error_response("Invalid input or storage failure"),
                        "409": error_response("Name already taken")
                    }
                }
            },
            "/products/get_all": {
                "get": {
                    "tags": ["Produto"],
                    "summary": "Lista todos os produtos",
                    "responses": {"200": listing}
                }
            },
            "/products/sarch_name": {
                "get": {
                    "tags": ["Produto"],
                    "summary": "Busca produtos pelo nome; menos de 3 caracteres lista todos",
                    "parameters": [
                        {"name": "nome", "in": "query", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {"200": listing}
                }
            },
            "/product/find_id": {
                "get": {
                    "tags": ["Produto"],
                    "summary": "Busca um produto pelo id",
                    "parameters": [
                        {"name": "id", "in": "query", "required": true, "schema": {"type": "integer"}}
                    ],
                    "responses": {
                        "200": product,
                        "404": error_response("Product not found")
                    }
                }
            }
        },
        "components": {"schemas": schemas()}
    })
}
