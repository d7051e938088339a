use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use urlencoding::encode;

use crate::config;
use crate::error::AppError;
use crate::models::{DemoImage, Property, RenovateRequest, RenovateResponse};

/// Thin request builder that prefixes the configured backend URL.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
    path: String,
    method: String,
}

impl RequestWrapper {
    fn new(path: &str, method: &str) -> Self {
        let full_url = format!("{}{}", config::get_backend_url(), path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        };

        Self {
            request,
            path: path.to_string(),
            method: method.to_string(),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body_string = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body_string);
        Ok(self)
    }

    /// Sends the request once. Transport failures surface as `gloo_net::Error`;
    /// status handling is left to the caller.
    pub async fn send(self) -> Result<Response, gloo_net::Error> {
        log::debug!("{} {}", self.method, self.path);
        self.request.send().await
    }
}

impl Api {
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}

/// The three backend operations the page needs.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn list_properties(&self) -> Result<Vec<Property>, AppError>;

    async fn list_demo_images(&self, property_id: &str) -> Result<Vec<DemoImage>, AppError>;

    async fn request_renovation(
        &self,
        property_id: &str,
        image_id: &str,
        body: &RenovateRequest,
    ) -> Result<RenovateResponse, AppError>;
}

pub fn houses_path() -> String {
    "/api/houses".to_string()
}

pub fn demo_images_path(property_id: &str) -> String {
    format!("/api/demo-images/{}", encode(property_id))
}

pub fn renovate_path(property_id: &str, image_id: &str) -> String {
    format!("/api/renovate/{}/{}", encode(property_id), encode(image_id))
}

/// `Backend` over `fetch`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpBackend;

async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, AppError> {
    if !response.ok() {
        return Err(AppError::Network(format!(
            "{} returned status {}",
            path,
            response.status()
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Network(format!("Failed to decode response: {}", e)))
}

impl Backend for HttpBackend {
    async fn list_properties(&self) -> Result<Vec<Property>, AppError> {
        let path = houses_path();
        let response = Api::get(&path).send().await?;
        read_json(&path, response).await
    }

    async fn list_demo_images(&self, property_id: &str) -> Result<Vec<DemoImage>, AppError> {
        let path = demo_images_path(property_id);
        let response = Api::get(&path).send().await?;
        read_json(&path, response).await
    }

    async fn request_renovation(
        &self,
        property_id: &str,
        image_id: &str,
        body: &RenovateRequest,
    ) -> Result<RenovateResponse, AppError> {
        let response = Api::post(&renovate_path(property_id, image_id))
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| AppError::Generation(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;
        if !response.ok() {
            return Err(AppError::Generation(format!(
                "renovate returned status {}",
                response.status()
            )));
        }
        response
            .json::<RenovateResponse>()
            .await
            .map_err(|e| AppError::Generation(format!("Failed to decode response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_the_backend_routes() {
        assert_eq!(houses_path(), "/api/houses");
        assert_eq!(demo_images_path("house1"), "/api/demo-images/house1");
        assert_eq!(
            renovate_path("house1", "demo-1700000000000"),
            "/api/renovate/house1/demo-1700000000000"
        );
    }

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(demo_images_path("a/b?c"), "/api/demo-images/a%2Fb%3Fc");
        assert_eq!(renovate_path("古民家", "x y"), "/api/renovate/%E5%8F%A4%E6%B0%91%E5%AE%B6/x%20y");
    }
}
