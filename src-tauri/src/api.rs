// =============================================================================
// api.rs - Client du service d'extraction de couleurs
// api.rs - Color extraction service client
// =============================================================================
//
// Le service est une boîte noire : POST multipart sur `/extract-colors`,
// réponse JSON contenant un tableau `colors`.
// The service is a black box: multipart POST on `/extract-colors`, JSON
// response holding a `colors` array.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::color::ColorInfo;
use crate::config::{self, AppConfig};
use crate::error::AppError;
use crate::picker::SelectedFile;

/// Corps de réponse attendu / Expected response body
#[derive(Deserialize, Debug)]
struct ExtractResponse {
    #[serde(default)]
    colors: Option<Vec<ColorInfo>>,
}

/// Client HTTP du service / HTTP client of the service
#[derive(Clone, Debug)]
pub struct ColorApi {
    client: reqwest::Client,
    url: String,
    n_colors: u32,
}

impl ColorApi {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config::REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: config.extract_url(),
            n_colors: config.n_colors,
        })
    }

    /// Envoie l'image et retourne les couleurs dominantes
    /// Uploads the image and returns the dominant colors
    ///
    /// # Errors
    /// * [`AppError::Network`] - requête impossible / request failed
    /// * [`AppError::Server`] - statut non 2xx / non-2xx status
    /// * [`AppError::EmptyResult`] - pas de `colors` / no `colors`
    pub async fn extract_colors(&self, file: &SelectedFile) -> Result<Vec<ColorInfo>, AppError> {
        let image = Part::bytes(file.bytes.clone())
            .file_name(file.info.name.clone())
            .mime_str(file.info.upload_mime_type())?;

        let form = Form::new()
            .text("n_colors", self.n_colors.to_string())
            .part("image", image);

        debug!(url = %self.url, name = %file.info.name, "uploading image");
        let response = self.client.post(&self.url).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;
        parse_response(status.as_u16(), &body)
    }
}

/// Interprète la réponse du service / Interprets the service response
pub fn parse_response(status: u16, body: &str) -> Result<Vec<ColorInfo>, AppError> {
    if !(200..300).contains(&status) {
        error!(status, body, "color API error");
        return Err(AppError::Server {
            status,
            body: body.to_string(),
        });
    }

    let response: ExtractResponse = serde_json::from_str(body)?;
    match response.colors {
        Some(colors) if !colors.is_empty() => {
            info!(count = colors.len(), "colors extracted");
            Ok(colors)
        }
        _ => {
            error!("no colors found in response");
            Err(AppError::EmptyResult)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const BODY: &str = r##"{"colors":[
        {"Hex":"#A1B2C3","RGB":"rgb(161, 178, 195)","HSL":"hsl(210, 20%, 70%)"},
        {"Hex":"#000000","RGB":"rgb(0, 0, 0)","HSL":"hsl(0, 0%, 0%)"}
    ]}"##;

    #[test]
    fn test_parse_success() {
        let colors = parse_response(200, BODY).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].hex, "#A1B2C3");
        assert_eq!(colors[1].hsl, "hsl(0, 0%, 0%)");
    }

    #[test]
    fn test_parse_server_error() {
        let err = parse_response(500, "boom").unwrap_err();
        assert!(matches!(err, AppError::Server { status: 500, .. }));
    }

    #[test]
    fn test_parse_missing_colors() {
        assert!(matches!(parse_response(200, "{}"), Err(AppError::EmptyResult)));
        assert!(matches!(
            parse_response(200, r#"{"colors":null}"#),
            Err(AppError::EmptyResult)
        ));
        assert!(matches!(
            parse_response(200, r#"{"colors":[]}"#),
            Err(AppError::EmptyResult)
        ));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_response(200, "<html>"),
            Err(AppError::InvalidResponse(_))
        ));
    }

    /// Serveur HTTP minimal : lit la requête entière puis répond `reply`
    /// Minimal HTTP server: reads the whole request then answers `reply`
    async fn serve_once(status_line: &'static str, reply: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];

            // Lit les en-têtes puis le corps selon Content-Length
            // Read headers then the body according to Content-Length
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length || text.ends_with("--\r\n") {
                        break;
                    }
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
                reply.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    fn api_for(base: String) -> ColorApi {
        ColorApi::new(&AppConfig {
            api_url: base,
            n_colors: 10,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_upload_multipart() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", BODY).await;
        let api = api_for(base);
        let file = SelectedFile::from_bytes("/tmp/photo.png", b"PNGDATA".to_vec());

        let colors = api.extract_colors(&file).await.unwrap();
        assert_eq!(colors.len(), 2);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /extract-colors"));
        assert!(request.contains("name=\"n_colors\""));
        assert!(request.contains("name=\"image\"; filename=\"photo.png\""));
        assert!(request.contains("Content-Type: image/png"));
        assert!(request.contains("PNGDATA"));
    }

    #[tokio::test]
    async fn test_upload_server_failure() {
        let (base, server) = serve_once("HTTP/1.1 503 Service Unavailable", "{}").await;
        let api = api_for(base);
        let file = SelectedFile::from_bytes("/tmp/photo.png", b"x".to_vec());

        let err = api.extract_colors(&file).await.unwrap_err();
        assert!(matches!(err, AppError::Server { status: 503, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Port 9 (discard) fermé sur la boucle locale / Port 9 closed on loopback
        let api = api_for("http://127.0.0.1:9".to_string());
        let file = SelectedFile::from_bytes("/tmp/photo.png", b"x".to_vec());
        let err = api.extract_colors(&file).await.unwrap_err();
        assert!(matches!(err, AppError::Network(_)));
    }
}
