//! Request handlers, one per route
//!
//! Each handler performs at most one storage call on the blocking pool and
//! either renders a page or redirects to the canonical listing route.

use super::error::WebError;
use super::views;
use super::AppState;
use crate::error::{PromptlogError, Result};
use crate::storage::SqliteStorage;
use anyhow::Context;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use serde::Deserialize;

type FormResult<T> = std::result::Result<Form<T>, FormRejection>;
type QueryResult<T> = std::result::Result<Query<T>, QueryRejection>;

/// Fields of a prompt submission
#[derive(Debug, Default, Deserialize)]
pub struct PromptForm {
    /// Prompt text; a missing field is treated as empty
    pub prompt: Option<String>,
}

/// Fields of a word count submission
#[derive(Debug, Default, Deserialize)]
pub struct WordCountForm {
    pub wordcount: Option<String>,
}

/// Query string of `/complete`
#[derive(Debug, Default, Deserialize)]
pub struct CompleteQuery {
    pub id: Option<String>,
}

/// Parse the `id` query parameter of `/complete`
pub fn parse_prompt_id(raw: Option<&str>) -> Result<i64> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(PromptlogError::InvalidInput("Missing ID".to_string()).into()),
    };
    raw.parse::<i64>()
        .map_err(|_| PromptlogError::InvalidInput("Invalid ID".to_string()).into())
}

/// Parse the `wordcount` form field
pub fn parse_word_count(raw: Option<&str>) -> Result<i64> {
    raw.unwrap_or_default()
        .parse::<i64>()
        .map_err(|e| PromptlogError::InvalidInput(format!("Invalid word count: {}", e)).into())
}

/// Read one field of a POST from the urlencoded body, then from the query
/// string.
///
/// A request without a urlencoded body (no body at all, or another content
/// type) is read as an empty form. Bodies or query strings that fail to
/// decode are rejected with a 400.
fn posted_field<T>(
    form: FormResult<T>,
    query: QueryResult<T>,
    field: impl Fn(T) -> Option<String>,
) -> std::result::Result<Option<String>, WebError> {
    let from_body = match form {
        Ok(Form(form)) => field(form),
        Err(FormRejection::InvalidFormContentType(_)) => None,
        Err(rejection) => return Err(rejection.into()),
    };
    match from_body {
        Some(value) => Ok(Some(value)),
        None => Ok(field(query?.0)),
    }
}

async fn with_storage<T, F>(state: &AppState, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&SqliteStorage) -> Result<T> + Send + 'static,
{
    let storage = state.storage.clone();
    tokio::task::spawn_blocking(move || f(&storage))
        .await
        .context("Storage task failed")?
}

/// `GET /` and `GET /add`
pub async fn prompt_form() -> std::result::Result<Html<String>, WebError> {
    Ok(Html(views::prompt_form()?))
}

/// `POST /` and `POST /add`
pub async fn add_prompt(
    State(state): State<AppState>,
    query: QueryResult<PromptForm>,
    form: FormResult<PromptForm>,
) -> std::result::Result<Redirect, WebError> {
    let text = posted_field(form, query, |f: PromptForm| f.prompt)?.unwrap_or_default();

    let id = with_storage(&state, move |s| s.add_prompt(&text))
        .await
        .map_err(|e| WebError::with_context("Could not save prompt", e))?;

    tracing::debug!(id, "Prompt added");
    Ok(Redirect::to("/view"))
}

/// `GET /view`
pub async fn view_pending(
    State(state): State<AppState>,
) -> std::result::Result<Html<String>, WebError> {
    let prompts = with_storage(&state, |s| s.list_prompts(false))
        .await
        .map_err(|e| WebError::with_context("Could not retrieve prompts", e))?;

    Ok(Html(views::prompt_list("Pending prompts", &prompts)?))
}

/// `GET /complete?id=N`
pub async fn complete_prompt(
    State(state): State<AppState>,
    query: QueryResult<CompleteQuery>,
) -> std::result::Result<Redirect, WebError> {
    let Query(query) = query?;
    let id = parse_prompt_id(query.id.as_deref())?;

    let changed = with_storage(&state, move |s| s.set_completed(id))
        .await
        .map_err(|e| WebError::with_context("Could not mark prompt as completed", e))?;

    tracing::debug!(id, changed, "Prompt marked completed");
    Ok(Redirect::to("/view"))
}

/// `GET /view_completed`
pub async fn view_completed(
    State(state): State<AppState>,
) -> std::result::Result<Html<String>, WebError> {
    let prompts = with_storage(&state, |s| s.list_prompts(true))
        .await
        .map_err(|e| WebError::with_context("Could not retrieve completed prompts", e))?;

    Ok(Html(views::prompt_list("Completed prompts", &prompts)?))
}

/// `GET /words`
pub async fn view_word_counts(
    State(state): State<AppState>,
) -> std::result::Result<Html<String>, WebError> {
    let samples = with_storage(&state, |s| s.list_word_counts())
        .await
        .map_err(|e| WebError::with_context("Could not retrieve word count", e))?;

    Ok(Html(views::word_count_list(&samples)?))
}

/// `GET /words/add`
pub async fn word_count_form() -> std::result::Result<Html<String>, WebError> {
    Ok(Html(views::word_count_form()?))
}

/// `POST /words/add`
pub async fn add_word_count(
    State(state): State<AppState>,
    query: QueryResult<WordCountForm>,
    form: FormResult<WordCountForm>,
) -> std::result::Result<Redirect, WebError> {
    let raw = posted_field(form, query, |f: WordCountForm| f.wordcount).map_err(|e| {
        WebError::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid word count: {}", e.message()),
        )
    })?;
    let word_count = parse_word_count(raw.as_deref())?;

    let id = with_storage(&state, move |s| s.add_word_count(word_count))
        .await
        .map_err(|e| WebError::with_context("Could not save wordcount", e))?;

    tracing::debug!(id, word_count, "Word count added");
    Ok(Redirect::to("/words"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_error_contains;

    #[test]
    fn test_parse_prompt_id_accepts_integers() {
        assert_eq!(parse_prompt_id(Some("42")).unwrap(), 42);
        assert_eq!(parse_prompt_id(Some("-3")).unwrap(), -3);
        assert_eq!(parse_prompt_id(Some("+8")).unwrap(), 8);
    }

    #[test]
    fn test_parse_prompt_id_missing() {
        assert_error_contains(parse_prompt_id(None), "Missing ID");
        assert_error_contains(parse_prompt_id(Some("")), "Missing ID");
    }

    #[test]
    fn test_parse_prompt_id_invalid() {
        assert_error_contains(parse_prompt_id(Some("abc")), "Invalid ID");
        assert_error_contains(parse_prompt_id(Some("1.5")), "Invalid ID");
    }

    #[test]
    fn test_parse_prompt_id_error_is_client_error() {
        let err = parse_prompt_id(Some("x")).unwrap_err();
        assert!(err
            .downcast_ref::<PromptlogError>()
            .is_some_and(PromptlogError::is_client_error));
    }

    #[test]
    fn test_parse_word_count() {
        assert_eq!(parse_word_count(Some("523")).unwrap(), 523);
        assert_eq!(parse_word_count(Some("-10")).unwrap(), -10);
        assert_error_contains(parse_word_count(Some("many")), "Invalid word count");
        assert_error_contains(parse_word_count(Some(" 12")), "Invalid word count");
        assert_error_contains(parse_word_count(None), "Invalid word count");
    }
}
