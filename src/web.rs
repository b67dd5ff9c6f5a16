//! Server-rendered to-do page and its form handlers.
//!
//! The page performs no validation of its own; it relies on the store's
//! checks and redirects back to `/` after every mutation so the next render
//! refetches the list.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::server::AppState;
use crate::store::Todo;

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.store.list()))
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub title: String,
}

pub async fn add(State(state): State<Arc<AppState>>, Form(form): Form<AddForm>) -> Redirect {
    if let Err(e) = state.store.insert(&form.title) {
        tracing::warn!(error = %e, "add task from form rejected");
    }
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub struct IdForm {
    pub id: i64,
}

pub async fn complete(State(state): State<Arc<AppState>>, Form(form): Form<IdForm>) -> Redirect {
    if let Err(e) = state.store.mark_complete(form.id) {
        tracing::warn!(error = %e, id = form.id, "complete task from form failed");
    }
    Redirect::to("/")
}

pub async fn delete(State(state): State<Arc<AppState>>, Form(form): Form<IdForm>) -> Redirect {
    if let Err(e) = state.store.delete(form.id) {
        tracing::warn!(error = %e, id = form.id, "delete task from form failed");
    }
    Redirect::to("/")
}

fn render_page(todos: &[Todo]) -> String {
    let completed = todos.iter().filter(|t| t.completed).count();

    let mut items = String::new();
    for todo in todos {
        let class = if todo.completed { "todo done" } else { "todo" };
        items.push_str(&format!(
            r#"<li class="{class}"><span>{title}</span><span class="actions">"#,
            title = escape_html(&todo.title),
        ));

        if !todo.completed {
            items.push_str(&format!(
                r#"<form method="post" action="/complete"><input type="hidden" name="id" value="{id}"><button class="ok">Complete</button></form>"#,
                id = todo.id,
            ));
        }
        items.push_str(&format!(
            r#"<form method="post" action="/delete"><input type="hidden" name="id" value="{id}"><button class="danger">Delete</button></form></span></li>"#,
            id = todo.id,
        ));
    }

    let list = if todos.is_empty() {
        r#"<p class="empty">No tasks yet. Add one to get started!</p>"#.to_string()
    } else {
        format!("<ul>{items}</ul>")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Todo App</title>
<style>
body {{ font-family: system-ui, sans-serif; background: #eef2ff; margin: 0; padding: 3rem 1rem; }}
main {{ max-width: 40rem; margin: 0 auto; background: #fff; border-radius: 12px; padding: 2rem; box-shadow: 0 4px 24px rgba(0,0,0,.08); }}
h1 {{ text-align: center; margin-top: 0; }}
.add {{ display: flex; gap: .5rem; margin-bottom: 1.5rem; }}
.add input {{ flex: 1; padding: .6rem .8rem; border: 1px solid #cbd5e1; border-radius: 8px; }}
button {{ padding: .5rem 1rem; border: 0; border-radius: 8px; color: #fff; cursor: pointer; }}
.add button {{ background: #2563eb; }}
.ok {{ background: #16a34a; }}
.danger {{ background: #dc2626; }}
ul {{ list-style: none; padding: 0; }}
.todo {{ display: flex; justify-content: space-between; align-items: center; padding: .75rem; border: 1px solid #e2e8f0; border-radius: 8px; margin-bottom: .5rem; }}
.todo.done span:first-child {{ text-decoration: line-through; color: #64748b; }}
.actions {{ display: flex; gap: .5rem; }}
.empty {{ text-align: center; color: #64748b; padding: 2rem 0; }}
footer {{ margin-top: 1.5rem; padding-top: 1rem; border-top: 1px solid #e2e8f0; text-align: center; color: #64748b; font-size: .85rem; }}
</style>
</head>
<body>
<main>
<h1>Todo App</h1>
<form class="add" method="post" action="/add">
<input type="text" name="title" placeholder="Enter a new task..." required>
<button>Add Task</button>
</form>
{list}
<footer>Total: {total} tasks &middot; Completed: {completed}</footer>
</main>
</body>
</html>
"#,
        total = todos.len(),
    )
}

/// Minimal HTML escaping for user-supplied titles.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
