#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use deduce::{
        Classification, DeduceError, Engine, ProofData, SearchOutcome, TableData,
    };
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{error, info};

    type SharedEngine = Arc<Engine>;
    type ApiError = (StatusCode, Json<ErrorResponse>);

    #[derive(Debug, Deserialize)]
    struct FormulaRequest {
        formula: String,
    }

    #[derive(Debug, Deserialize)]
    struct TableRequest {
        formulas: Vec<String>,
    }

    #[derive(Debug, Deserialize)]
    struct ProveRequest {
        premises: Vec<String>,
        conclusion: String,
        #[serde(default)]
        max_steps: Option<usize>,
    }

    #[derive(Debug, Serialize)]
    struct ParseResponse {
        formula: String,
        propositions: Vec<char>,
        depth: usize,
    }

    #[derive(Debug, Serialize)]
    struct ClassifyResponse {
        formula: String,
        classification: Classification,
    }

    #[derive(Debug, Serialize)]
    struct ProveResponse {
        proof: ProofData,
        #[serde(skip_serializing_if = "Option::is_none")]
        outcome: Option<SearchOutcome>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    }

    #[derive(Debug, Serialize)]
    pub struct ErrorResponse {
        error: String,
    }

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "deduce=info,tower_http=info".into()),
            )
            .init();

        let app = router(Arc::new(engine));

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("deduce server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn router(engine: SharedEngine) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/parse", post(parse_formula))
            .route("/table", post(truth_table))
            .route("/classify", post(classify))
            .route("/prove", post(prove))
            .layer(CorsLayer::permissive())
            .with_state(engine)
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "deduce",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn parse_formula(
        State(engine): State<SharedEngine>,
        Json(payload): Json<FormulaRequest>,
    ) -> Result<Json<ParseResponse>, ApiError> {
        let formula = engine
            .parse(&payload.formula)
            .map_err(|e| bad_request("Parse failed", &e))?;

        Ok(Json(ParseResponse {
            formula: formula.to_string(),
            propositions: formula.atomic_propositions().iter().copied().collect(),
            depth: formula.depth(),
        }))
    }

    async fn truth_table(
        State(engine): State<SharedEngine>,
        Json(payload): Json<TableRequest>,
    ) -> Result<Json<TableData>, ApiError> {
        let table = engine
            .truth_table(&payload.formulas)
            .map_err(|e| bad_request("Truth table failed", &e))?;

        info!(
            "Built truth table with {} column(s) and {} row(s)",
            table.headers().len(),
            table.rows().len()
        );
        Ok(Json(table.data()))
    }

    async fn classify(
        State(engine): State<SharedEngine>,
        Json(payload): Json<FormulaRequest>,
    ) -> Result<Json<ClassifyResponse>, ApiError> {
        let formula = engine
            .parse(&payload.formula)
            .map_err(|e| bad_request("Parse failed", &e))?;
        let classification = engine
            .validator()
            .classify(&formula)
            .map_err(|e| bad_request("Classification failed", &e))?;

        Ok(Json(ClassifyResponse {
            formula: formula.to_string(),
            classification,
        }))
    }

    /// Runs the search on a fresh proof; an unfinished search still returns
    /// the steps it derived
    ///
    /// The requested budget is capped at the engine's `max_search_steps`, and
    /// the search runs on the blocking pool.
    async fn prove(
        State(engine): State<SharedEngine>,
        Json(payload): Json<ProveRequest>,
    ) -> Result<Json<ProveResponse>, ApiError> {
        let proof = engine
            .proof_for(&payload.premises, &payload.conclusion)
            .map_err(|e| bad_request("Invalid argument", &e))?;

        let cap = engine.limits().max_search_steps;
        let budget = payload.max_steps.map_or(cap, |steps| steps.min(cap));

        let (proof, result) = tokio::task::spawn_blocking(move || {
            let mut proof = proof;
            let result = proof.auto_prove(budget);
            (proof, result)
        })
        .await
        .map_err(|e| {
            error!("Proof search task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Proof search failed".to_string(),
                }),
            )
        })?;

        match result {
            Ok(outcome) => {
                info!("Proved {} in {} step(s)", payload.conclusion, outcome.steps_added);
                Ok(Json(ProveResponse {
                    proof: proof.proof_data(),
                    outcome: Some(outcome),
                    error: None,
                }))
            }
            Err(e @ DeduceError::SearchExhausted { .. }) => {
                info!("Search for {} stopped: {}", payload.conclusion, e.message());
                Ok(Json(ProveResponse {
                    proof: proof.proof_data(),
                    outcome: None,
                    error: Some(e.message()),
                }))
            }
            Err(e) => Err(bad_request("Proof search failed", &e)),
        }
    }

    fn bad_request(context: &str, e: &DeduceError) -> ApiError {
        error!("{}: {}", context, e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("{}: {}", context, e.message()),
            }),
        )
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: deduce::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
