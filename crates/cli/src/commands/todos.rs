//! Manage todos.
//!
//! Todos are owned by an email address. `list` shows the signed-in user's todos
//! unless `--all` is passed, and `add` files new todos under the signed-in email.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_humanize::HumanTime;
use shared::api::{CreateTodoPayload, UpdateTodoPayload};
use tabled::{Table, Tabled, settings::Style};
use uuid::Uuid;

use crate::{api::Api, config::Config, session, ui};

#[derive(Tabled)]
struct TodoRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct OwnedTodoRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Owner")]
    user: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Date")]
    date: String,
}

pub async fn list(config: &Config, all: bool) -> Result<()> {
    let api = Api::new(config.api_url.clone());

    let todos = if all {
        ui::spin("Fetching todos...", api.list_todos()).await?
    } else {
        let claims = session::current(config)?;
        ui::spin("Fetching todos...", api.list_user_todos(&claims.email)).await?
    };

    if todos.is_empty() {
        println!("No todos");
        return Ok(());
    }

    let table = if all {
        let rows: Vec<OwnedTodoRow> = todos
            .into_iter()
            .map(|t| OwnedTodoRow {
                id: t.id.to_string(),
                user: t.user,
                tag: t.tag,
                description: t.description,
                date: HumanTime::from(t.date).to_string(),
            })
            .collect();
        Table::new(rows).with(Style::rounded()).to_string()
    } else {
        let rows: Vec<TodoRow> = todos
            .into_iter()
            .map(|t| TodoRow {
                id: t.id.to_string(),
                tag: t.tag,
                description: t.description,
                date: HumanTime::from(t.date).to_string(),
            })
            .collect();
        Table::new(rows).with(Style::rounded()).to_string()
    };
    println!("{table}");

    Ok(())
}

pub async fn add(config: &Config, tag: String, description: String) -> Result<()> {
    let claims = session::current(config)?;
    let api = Api::new(config.api_url.clone());

    let todo = ui::spin(
        "Adding todo...",
        api.create_todo(CreateTodoPayload {
            user: claims.email,
            tag,
            description,
        }),
    )
    .await?;

    ui::success(&format!("Added {}", ui::bold(&todo.id.to_string())));

    Ok(())
}

pub async fn edit(
    config: &Config,
    id: &str,
    tag: Option<String>,
    description: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let id = parse_id(id)?;
    let payload = UpdateTodoPayload {
        user: None,
        date: date.as_deref().map(parse_date).transpose()?,
        tag,
        description,
    };

    if payload.is_empty() {
        anyhow::bail!("Nothing to change. Pass --tag, --description or --date.");
    }

    let api = Api::new(config.api_url.clone());
    ui::spin("Updating todo...", api.update_todo(id, payload)).await?;

    ui::success("Updated");

    Ok(())
}

pub async fn remove(config: &Config, id: &str) -> Result<()> {
    let id = parse_id(id)?;

    let api = Api::new(config.api_url.clone());
    ui::spin("Deleting...", api.delete_todo(id)).await?;

    ui::success("Deleted");

    Ok(())
}

fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("Invalid todo ID: {raw}"))
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }

    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {raw} (expected YYYY-MM-DD or RFC 3339)"))?;

    Ok(day.and_time(chrono::NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::context::TestContext;
    use chrono::TimeZone;
    use shared::api::TodoItem;
    use wiremock::{
        Mock, ResponseTemplate,
        matchers::{body_json, method, path},
    };

    const EMAIL: &str = "alice@example.com";

    fn todo(user: &str) -> TodoItem {
        TodoItem {
            id: Uuid::new_v4(),
            user: user.to_string(),
            date: Utc::now(),
            tag: "home".to_string(),
            description: "water plants".to_string(),
        }
    }

    #[test]
    fn parses_plain_dates_as_utc_midnight() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(
            parse_date("2025-03-01T12:00:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn rejects_unparseable_dates() {
        assert!(parse_date("tomorrow").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[tokio::test]
    async fn list_fetches_own_todos() {
        let ctx = TestContext::with_session(EMAIL).await;

        Mock::given(method("GET"))
            .and(path(format!("/todos/{EMAIL}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![todo(EMAIL)]))
            .expect(1)
            .mount(&ctx.mock_server)
            .await;

        list(&ctx.config, false).await.unwrap();
    }

    #[tokio::test]
    async fn list_all_needs_no_session() {
        let ctx = TestContext::new().await;

        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(vec![todo(EMAIL), todo("bob@example.com")]),
            )
            .expect(1)
            .mount(&ctx.mock_server)
            .await;

        list(&ctx.config, true).await.unwrap();
    }

    #[tokio::test]
    async fn add_files_todo_under_session_email() {
        let ctx = TestContext::with_session(EMAIL).await;

        Mock::given(method("POST"))
            .and(path("/todos"))
            .and(body_json(serde_json::json!({
                "user": EMAIL,
                "tag": "home",
                "description": "water plants"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(todo(EMAIL)))
            .expect(1)
            .mount(&ctx.mock_server)
            .await;

        add(&ctx.config, "home".to_string(), "water plants".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn edit_sends_only_changed_fields() {
        let ctx = TestContext::new().await;
        let id = Uuid::new_v4();

        Mock::given(method("PUT"))
            .and(path(format!("/todos/{id}")))
            .and(body_json(serde_json::json!({
                "date": "2025-03-01T00:00:00Z",
                "tag": "urgent"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "updatedId": id,
                "modifiedCount": 1
            })))
            .expect(1)
            .mount(&ctx.mock_server)
            .await;

        edit(
            &ctx.config,
            &id.to_string(),
            Some("urgent".to_string()),
            None,
            Some("2025-03-01".to_string()),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn edit_without_changes_fails_locally() {
        let ctx = TestContext::new().await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&ctx.mock_server)
            .await;

        let err = edit(&ctx.config, &Uuid::new_v4().to_string(), None, None, None)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Nothing to change"));
    }

    #[tokio::test]
    async fn remove_reports_missing_todo() {
        let ctx = TestContext::new().await;
        let id = Uuid::new_v4();

        Mock::given(method("DELETE"))
            .and(path(format!("/todos/{id}")))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({ "error": "todo not found" })),
            )
            .mount(&ctx.mock_server)
            .await;

        let err = remove(&ctx.config, &id.to_string()).await.unwrap_err();

        assert_eq!(err.to_string(), "todo not found");
    }

    #[tokio::test]
    async fn remove_rejects_malformed_id() {
        let ctx = TestContext::new().await;

        let err = remove(&ctx.config, "42").await.unwrap_err();

        assert!(err.to_string().contains("Invalid todo ID"));
    }
}
