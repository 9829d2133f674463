#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct StartBody {
    #[schema(example = "./worker.sh")]
    pub script: String,
    #[schema(example = json!(["--queue", "default"]))]
    pub params: Option<Vec<String>>,
    #[schema(example = "srv-main")]
    pub name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct TargetBody {
    #[schema(example = "srv-4b4f6b0a-5b5e-4fd0-9f86-3a4b94f2d102")]
    pub uuid: String,
}

#[derive(Serialize, ToSchema)]
pub struct DataResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Serialize, ToSchema)]
pub struct StartResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "Process started successfully")]
    pub message: String,
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Serialize, ToSchema)]
pub struct ActionResponse {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "Process stopped successfully")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "error")]
    pub status: String,
    #[schema(example = "Error connecting to process manager")]
    pub message: String,
}
