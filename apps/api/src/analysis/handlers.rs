//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::pipeline::{evaluate_candidate, CandidateEvaluation};
use crate::errors::AppError;
use crate::extraction::DocumentKind;
use crate::ontology::SkillListing;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub match_score: f64,
    #[serde(flatten)]
    pub evaluation: CandidateEvaluation,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<SkillListing>,
}

/// How the job description arrives in an upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JdInputMethod {
    Text,
    Pdf,
    Image,
}

impl JdInputMethod {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "" | "text" => Ok(JdInputMethod::Text),
            "pdf" => Ok(JdInputMethod::Pdf),
            "image" => Ok(JdInputMethod::Image),
            other => Err(AppError::Validation(format!(
                "Unknown jd_input_method '{other}' (expected text, pdf or image)"
            ))),
        }
    }
}

/// Fields of the upload form. Empty file parts count as missing.
#[derive(Debug, Default)]
struct UploadForm {
    resume_pdf: Option<Bytes>,
    jd_input_method: Option<String>,
    job_description_text: Option<String>,
    job_description_pdf: Option<Bytes>,
    job_description_image: Option<Bytes>,
}

impl UploadForm {
    async fn read(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "resume_pdf" => {
                    form.resume_pdf = non_empty(field.bytes().await.map_err(multipart_error)?)
                }
                "job_description_pdf" => {
                    form.job_description_pdf =
                        non_empty(field.bytes().await.map_err(multipart_error)?)
                }
                "job_description_image" => {
                    form.job_description_image =
                        non_empty(field.bytes().await.map_err(multipart_error)?)
                }
                "jd_input_method" => {
                    form.jd_input_method = Some(field.text().await.map_err(multipart_error)?)
                }
                "job_description_text" => {
                    form.job_description_text = Some(field.text().await.map_err(multipart_error)?)
                }
                _ => debug!("Ignoring unknown form field '{name}'"),
            }
        }

        Ok(form)
    }
}

fn non_empty(bytes: Bytes) -> Option<Bytes> {
    (!bytes.is_empty()).then_some(bytes)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed upload: {}", e.body_text()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis
///
/// Scores already-extracted resume text against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    run_analysis(&state, &request.resume_text, &request.jd_text).map(Json)
}

/// POST /api/v1/analysis/upload
///
/// Multipart form: `resume_pdf` plus a job description supplied as text, PDF or image
/// according to `jd_input_method`. Both documents are extracted before analysis.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = UploadForm::read(&mut multipart).await?;

    let resume_pdf = form
        .resume_pdf
        .ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;
    let resume_text = state.extractor.extract(DocumentKind::Pdf, resume_pdf).await?;

    let method = JdInputMethod::parse(form.jd_input_method.as_deref().unwrap_or_default())?;
    let jd_text = match method {
        JdInputMethod::Text => form.job_description_text.unwrap_or_default(),
        JdInputMethod::Pdf => match form.job_description_pdf {
            Some(bytes) => state.extractor.extract(DocumentKind::Pdf, bytes).await?,
            None => String::new(),
        },
        JdInputMethod::Image => match form.job_description_image {
            Some(bytes) => state.extractor.extract(DocumentKind::Image, bytes).await?,
            None => String::new(),
        },
    };

    run_analysis(&state, &resume_text, &jd_text).map(Json)
}

/// GET /api/v1/skills
///
/// Lists the canonical skills and the aliases recognised for each.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    Json(SkillListResponse {
        skills: state.ontology.listing(),
    })
}

fn run_analysis(
    state: &AppState,
    resume_text: &str,
    jd_text: &str,
) -> Result<AnalyzeResponse, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation("Job description was empty".to_string()));
    }

    let analysis_id = Uuid::new_v4();
    let evaluation = evaluate_candidate(resume_text, jd_text, &state.ontology, &state.resources);

    info!(
        "Analysis {analysis_id}: {}/{} requirements met ({:.2}), {} unmet skills",
        evaluation.report.met_count,
        evaluation.report.total_requirements,
        evaluation.report.match_score,
        evaluation.report.unmet_skills.len()
    );

    Ok(AnalyzeResponse {
        analysis_id,
        generated_at: Utc::now(),
        match_score: evaluation.report.match_score,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{body::Body, http::Request, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::extraction::DocumentExtractor;
    use crate::ontology::SkillOntology;
    use crate::preparation::ResourceTable;
    use crate::routes::build_router;

    /// Treats every upload as UTF-8 text, so tests need no real PDFs.
    struct Utf8Extractor;

    #[async_trait]
    impl DocumentExtractor for Utf8Extractor {
        async fn extract(&self, kind: DocumentKind, bytes: Bytes) -> Result<String, AppError> {
            match kind {
                DocumentKind::Image => Err(AppError::UnsupportedMedia("no OCR".to_string())),
                _ => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            }
        }
    }

    const BOUNDARY: &str = "skillgap-test-boundary";

    fn app() -> Router {
        build_router(AppState {
            config: Config::from_vars(|_| None).unwrap(),
            ontology: Arc::new(SkillOntology::builtin().unwrap()),
            resources: Arc::new(ResourceTable::builtin()),
            extractor: Arc::new(Utf8Extractor),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn json_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analysis")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// `(name, Some(filename) for file parts, content)`
    fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (name, filename, content) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match filename {
                Some(filename) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                )),
            }
            body.push_str(content);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::builder()
            .method("POST")
            .uri("/api/v1/analysis/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_jd_input_method_parse() {
        assert_eq!(JdInputMethod::parse("PDF").unwrap(), JdInputMethod::Pdf);
        assert_eq!(JdInputMethod::parse("").unwrap(), JdInputMethod::Text);
        assert_eq!(JdInputMethod::parse("image").unwrap(), JdInputMethod::Image);
        assert!(JdInputMethod::parse("fax").is_err());
    }

    #[tokio::test]
    async fn test_analyze_returns_report() {
        let (status, body) = send(json_request(json!({
            "resume_text": "Jane Doe\nPython developer",
            "jd_text": "* Python and SQL required\n* Python, Java, or C++",
        })))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidate_name"], "Jane Doe");
        assert_eq!(body["match_score"], 50.0);
        assert_eq!(body["report"]["total_requirements"], 2);
        assert_eq!(body["report"]["unmet_skills"], json!(["database"]));
        assert_eq!(body["report"]["per_requirement"][0]["condition"], "all");
        assert_eq!(body["feedback"]["status"], "good");
        assert!(body["analysis_id"].is_string());
        // no guidance exists for "database"
        assert_eq!(body["preparation_plan"], json!({}));
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_jd() {
        let (status, body) = send(json_request(json!({
            "resume_text": "Python",
            "jd_text": "   ",
        })))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_jd_without_known_skills_scores_full() {
        let (status, body) = send(json_request(json!({
            "resume_text": "",
            "jd_text": "Great communicator\nTeam player",
        })))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_score"], 100.0);
        assert_eq!(body["feedback"]["status"], "great");
        assert_eq!(body["candidate_name"], "Candidate");
    }

    #[tokio::test]
    async fn test_list_skills() {
        let request = Request::builder()
            .uri("/api/v1/skills")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        let skills = body["skills"].as_array().unwrap();
        let devops = skills.iter().find(|s| s["skill"] == "devops").unwrap();
        assert!(devops["aliases"]
            .as_array()
            .unwrap()
            .contains(&json!("kubernetes")));
    }

    #[tokio::test]
    async fn test_upload_with_text_jd() {
        let (status, body) = send(multipart_request(&[
            ("resume_pdf", Some("cv.pdf"), "Sam Lee\nGo and Docker"),
            ("jd_input_method", None, "text"),
            ("job_description_text", None, "- Golang services\n- Java and Spring"),
        ]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidate_name"], "Sam Lee");
        assert_eq!(body["report"]["total_requirements"], 2);
        assert_eq!(body["report"]["met_count"], 1);
        assert_eq!(body["report"]["unmet_skills"], json!(["backend", "java"]));
        assert!(body["preparation_plan"]["java"]["preparation"].is_string());
        assert!(body["preparation_plan"]["backend"].is_object());
    }

    #[tokio::test]
    async fn test_upload_with_pdf_jd() {
        let (status, body) = send(multipart_request(&[
            ("resume_pdf", Some("cv.pdf"), "Kubernetes operator"),
            ("jd_input_method", None, "pdf"),
            ("job_description_pdf", Some("jd.pdf"), "Experience with Docker/Kubernetes"),
        ]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_score"], 100.0);
    }

    #[tokio::test]
    async fn test_upload_without_resume_rejected() {
        let (status, body) = send(multipart_request(&[
            ("resume_pdf", Some(""), ""),
            ("job_description_text", None, "Python developer"),
        ]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No resume file uploaded");
    }

    #[tokio::test]
    async fn test_upload_image_jd_unsupported() {
        let (status, body) = send(multipart_request(&[
            ("resume_pdf", Some("cv.pdf"), "Python"),
            ("jd_input_method", None, "image"),
            ("job_description_image", Some("jd.png"), "pixels"),
        ]))
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_MEDIA");
    }

    #[tokio::test]
    async fn test_upload_pdf_method_without_file_is_empty_jd() {
        let (status, body) = send(multipart_request(&[
            ("resume_pdf", Some("cv.pdf"), "Python"),
            ("jd_input_method", None, "pdf"),
        ]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Job description was empty");
    }
}
