// HTTP handler bindings for Battlesnake API endpoints
//
// This module provides thin wrapper functions that bind Rocket HTTP routes
// to the Bot's core logic methods. Handlers are responsible for:
// - Deserializing incoming JSON requests
// - Extracting Bot instance from Rocket's managed state
// - Delegating to Bot methods
// - Serializing responses

use rocket::fairing::AdHoc;
use rocket::serde::json::Json;
use rocket::{Build, Rocket};
use serde_json::{json, Value};

use crate::bot::Bot;
use crate::types::{MoveRequest, MoveResponse, StartRequest, StartResponse};

/// GET / endpoint
/// Returns bot appearance configuration
#[get("/")]
pub fn index(bot: &rocket::State<Bot>) -> Json<StartResponse> {
    Json(bot.info())
}

/// POST /start endpoint
/// Called when a game starts, replies with the snake's appearance
#[post("/start", format = "json", data = "<start_req>")]
pub fn start(bot: &rocket::State<Bot>, start_req: Json<StartRequest>) -> Json<StartResponse> {
    Json(bot.start(&start_req))
}

/// POST /move endpoint
/// Called each turn to compute and return the next move
#[post("/move", format = "json", data = "<move_req>")]
pub fn get_move(bot: &rocket::State<Bot>, move_req: Json<MoveRequest>) -> Json<MoveResponse> {
    Json(bot.get_move(&move_req))
}

/// POST /end endpoint
/// Called when a game ends; no response body is required
#[post("/end")]
pub fn end(bot: &rocket::State<Bot>) -> Json<Value> {
    bot.end();
    Json(json!({}))
}

/// Builds the rocket instance serving `bot`
pub fn build_rocket(bot: Bot) -> Rocket<Build> {
    rocket::build()
        .manage(bot)
        .attach(AdHoc::on_response("Server ID Middleware", |_, res| {
            Box::pin(async move {
                res.set_raw_header("Server", "battlesnake/radiant-snake");
            })
        }))
        .mount("/", routes![index, start, get_move, end])
}
