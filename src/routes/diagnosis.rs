use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{aggregate, recommend_skills, select_partner, select_rival, MatchResult, Matcher};
use crate::models::{
    CategoriesResponse, ErrorResponse, HealthResponse, MatchRequest, MatchResponse,
    QuestionsResponse, RawAnswer, ScoreRequest, ScoreResponse, ScoredFigure,
};
use crate::services::{CorpusStore, QuestionCatalog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub catalog: Arc<QuestionCatalog>,
    pub corpus: CorpusStore,
    pub limits: MatchingSettings,
}

/// Configure all diagnosis-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/questions", web::get().to(get_questions))
        .route("/figures/categories", web::get().to(get_categories))
        .route("/diagnosis/score", web::post().to(score_answers))
        .route("/diagnosis/match", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        figures_loaded: state.corpus.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Question catalog endpoint
///
/// GET /api/v1/questions
async fn get_questions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(QuestionsResponse {
        questions: state.catalog.questions().to_vec(),
    })
}

/// Category listing endpoint
///
/// GET /api/v1/figures/categories
async fn get_categories(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CategoriesResponse {
        categories: state.corpus.categories(),
    })
}

/// Aggregate questionnaire answers into a trait vector
///
/// POST /api/v1/diagnosis/score
///
/// Request body:
/// ```json
/// {
///   "answers": [{ "questionId": "p1", "value": 4 }]
/// }
/// ```
///
/// The client persists the returned scores and posts them back to the
/// match endpoint when rendering results.
async fn score_answers(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let answers: Vec<RawAnswer> = req
        .answers
        .iter()
        .map(|a| RawAnswer {
            question_id: a.question_id.clone(),
            value: a.value,
        })
        .collect();

    let scores = aggregate(&answers, state.catalog.by_id());

    tracing::debug!(
        "Aggregated {} answers into type {}",
        answers.len(),
        scores.personality.type_code()
    );

    HttpResponse::Ok().json(ScoreResponse {
        type_code: scores.personality.type_code(),
        scores,
    })
}

/// Match a trait vector against the figure corpus
///
/// POST /api/v1/diagnosis/match
///
/// Request body:
/// ```json
/// {
///   "scores": { "personality": { ... }, "talents": { ... } },
///   "limit": 10
/// }
/// ```
async fn find_matches(state: web::Data<AppState>, req: web::Json<MatchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit) as usize;

    let ranked = state.matcher.rank(&req.scores);

    let partner = select_partner(&req.scores, &ranked).map(|m| to_scored(&m));
    let rival = select_rival(&ranked).map(|m| to_scored(&m));

    // Skills come from the best match's talent profile
    let recommended_skills: Vec<String> = ranked
        .first()
        .map(|best| {
            recommend_skills(&best.profile.talents)
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let response = MatchResponse {
        diagnosis_id: uuid::Uuid::new_v4().to_string(),
        type_code: req.scores.personality.type_code(),
        matches: ranked.iter().take(limit).map(to_scored).collect(),
        partner,
        rival,
        recommended_skills,
        total_figures: ranked.len(),
    };

    tracing::info!(
        "Returning {} of {} ranked figures (type {})",
        response.matches.len(),
        response.total_figures,
        response.type_code
    );

    HttpResponse::Ok().json(response)
}

fn to_scored(m: &MatchResult<'_>) -> ScoredFigure {
    let p = m.profile;
    ScoredFigure {
        id: p.id.clone(),
        name: p.name.clone(),
        era: p.era.clone(),
        title: p.title.clone(),
        category: p.category.clone(),
        description: p.description.clone(),
        quote: p.quote.clone(),
        type_code: p.type_code.clone(),
        personality: p.personality,
        talents: p.talents,
        suitable_careers: p.suitable_careers.clone(),
        distance: m.distance,
        similarity_percent: m.similarity_percent,
    }
}
