use axum::response::{Html, Json};
use serde_json::{json, Map, Value};

pub async fn get_api_docs() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Movie Database API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>
"#,
    )
}

pub async fn get_openapi_spec() -> Json<Value> {
    Json(openapi_document())
}

fn movie_ref() -> Value {
    json!({ "$ref": "#/components/schemas/Movie" })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn list_response(summary: &str, params: &[(&str, &str)]) -> Value {
    let parameters: Vec<Value> = params
        .iter()
        .map(|(name, kind)| {
            json!({
                "name": name,
                "in": "path",
                "required": true,
                "schema": { "type": kind }
            })
        })
        .collect();

    json!({
        "get": {
            "tags": ["Movies"],
            "summary": summary,
            "parameters": parameters,
            "responses": {
                "200": {
                    "description": "Matching movies (possibly empty)",
                    "content": json_content(json!({ "type": "array", "items": movie_ref() }))
                }
            }
        }
    })
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": json_content(json!({ "$ref": "#/components/schemas/ErrorResponse" }))
    })
}

pub fn openapi_document() -> Value {
    let id_param = json!([{
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer" }
    }]);

    let mut paths = Map::new();
    paths.insert(
        "/health".to_string(),
        json!({ "get": { "tags": ["System"], "summary": "Liveness check", "responses": { "200": { "description": "Service is up" } } } }),
    );
    paths.insert(
        "/movies".to_string(),
        json!({
            "get": {
                "tags": ["Movies"],
                "summary": "List every movie in insertion order",
                "responses": {
                    "200": {
                        "description": "All movies",
                        "content": json_content(json!({ "type": "array", "items": movie_ref() }))
                    }
                }
            },
            "post": {
                "tags": ["Movies"],
                "summary": "Create a movie",
                "requestBody": { "required": true, "content": json_content(movie_ref()) },
                "responses": {
                    "200": { "description": "Created movie", "content": json_content(movie_ref()) },
                    "409": error_response("A movie with this ID already exists"),
                    "422": error_response("Invalid movie payload")
                }
            }
        }),
    );
    paths.insert(
        "/movies/{id}".to_string(),
        json!({
            "get": {
                "tags": ["Movies"],
                "summary": "Get a movie by ID",
                "parameters": id_param,
                "responses": {
                    "200": { "description": "The movie", "content": json_content(movie_ref()) },
                    "404": error_response("Movie not found")
                }
            },
            "put": {
                "tags": ["Movies"],
                "summary": "Replace a movie",
                "parameters": id_param,
                "requestBody": { "required": true, "content": json_content(movie_ref()) },
                "responses": {
                    "200": { "description": "Replacement movie", "content": json_content(movie_ref()) },
                    "404": error_response("Movie not found"),
                    "422": error_response("Invalid movie payload")
                }
            },
            "delete": {
                "tags": ["Movies"],
                "summary": "Delete a movie",
                "parameters": id_param,
                "responses": {
                    "200": { "description": "Movie deleted" },
                    "404": error_response("Movie not found")
                }
            }
        }),
    );

    let filters: [(&str, &str, &[(&str, &str)]); 9] = [
        ("/movies/genre/{genre}", "Filter by genre (case-insensitive)", &[("genre", "string")]),
        ("/movies/director/{name}", "Filter by director (case-insensitive)", &[("name", "string")]),
        ("/movies/year/{year}", "Filter by release year", &[("year", "integer")]),
        ("/movies/rating/{rating}", "Filter by rating (case-insensitive)", &[("rating", "string")]),
        ("/movies/language/{lang}", "Filter by primary language (case-insensitive)", &[("lang", "string")]),
        ("/movies/budget/{min}/{max}", "Budget within [min, max]", &[("min", "number"), ("max", "number")]),
        ("/movies/revenue/{min}/{max}", "Revenue within [min, max]", &[("min", "number"), ("max", "number")]),
        ("/movies/duration/{min}/{max}", "Duration within [min, max] minutes", &[("min", "integer"), ("max", "integer")]),
        ("/movies/name/{substr}", "Name contains substring (case-insensitive)", &[("substr", "string")]),
    ];
    for (path, summary, params) in filters {
        paths.insert(path.to_string(), list_response(summary, params));
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Movie Database API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "In-memory movie catalog loaded from a data file at startup. Changes are not persisted."
        },
        "servers": [{ "url": "/", "description": "Current server" }],
        "paths": paths,
        "components": {
            "schemas": {
                "Movie": {
                    "type": "object",
                    "required": [
                        "ID", "MOVIENAME", "GENRE", "YEAROFRELEASE", "BUDGET", "REVENUE",
                        "DIRECTORNAME", "DURATION", "RATING", "PRIMARYLANGUAGE", "POSTER"
                    ],
                    "properties": {
                        "ID": { "type": "integer" },
                        "MOVIENAME": { "type": "string" },
                        "GENRE": { "type": "string" },
                        "YEAROFRELEASE": { "type": "integer" },
                        "BUDGET": { "type": "number", "minimum": 0 },
                        "REVENUE": { "type": "number", "minimum": 0 },
                        "DIRECTORNAME": { "type": "string" },
                        "DURATION": { "type": "integer", "minimum": 0 },
                        "RATING": { "type": "string" },
                        "PRIMARYLANGUAGE": { "type": "string" },
                        "POSTER": { "type": "string" }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": { "error": { "type": "string" } }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_movie_route() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/movies",
            "/movies/{id}",
            "/movies/genre/{genre}",
            "/movies/budget/{min}/{max}",
            "/movies/name/{substr}",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(paths.len(), 12);
        assert!(doc["paths"]["/movies/{id}"]["delete"].is_object());
    }
}
