//! Conversation CLI commands: list, show, delete.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use uuid::Uuid;

use murmur_types::message::MessageRole;

use crate::state::AppState;

fn parse_id(id: &str) -> Result<Uuid> {
    id.parse::<Uuid>()
        .map_err(|_| anyhow::anyhow!("'{id}' is not a valid conversation id"))
}

/// List conversations in a table (or JSON with `--json`).
pub async fn list_conversations(
    state: &AppState,
    offset: i64,
    limit: i64,
    json: bool,
) -> Result<()> {
    let conversations = state.conversation_service.list(offset, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&conversations)?);
        return Ok(());
    }

    if conversations.is_empty() {
        println!();
        println!(
            "  {} No conversations yet. The API creates them via {}",
            style("i").blue().bold(),
            style("POST /conversations/").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Title").fg(Color::White),
        Cell::new("Created").fg(Color::White),
        Cell::new("ID").fg(Color::White),
    ]);

    for conversation in &conversations {
        table.add_row(vec![
            Cell::new(&conversation.title).fg(Color::Cyan),
            Cell::new(conversation.created_at.format("%Y-%m-%d %H:%M").to_string())
                .fg(Color::DarkGrey),
            Cell::new(conversation.id.to_string()).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} conversation{}",
        style(conversations.len()).bold(),
        if conversations.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// Show a conversation and its full message history.
pub async fn show_conversation(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    let conversation = state.conversation_service.get(&id).await?;
    let messages = state.message_service.list_for_conversation(&id).await?;

    if json {
        let combined = serde_json::json!({
            "conversation": conversation,
            "messages": messages,
        });
        println!("{}", serde_json::to_string_pretty(&combined)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(&conversation.title).cyan().bold());
    println!(
        "  {} {}",
        style("Created:").bold(),
        conversation.created_at.format("%Y-%m-%d %H:%M")
    );
    println!("  {} {}", style("ID:").bold(), style(conversation.id).dim());
    println!();

    if messages.is_empty() {
        println!("  {}", style("(no messages)").dim());
        println!();
        return Ok(());
    }

    for message in &messages {
        let speaker = match message.role {
            MessageRole::User => style("user").green().bold(),
            MessageRole::Assistant => style("assistant").magenta().bold(),
        };
        println!("  {speaker}");
        for line in message.content.lines() {
            println!("    {line}");
        }
        println!();
    }

    Ok(())
}

/// Delete a conversation and all its messages.
pub async fn delete_conversation(state: &AppState, id: &str, json: bool) -> Result<()> {
    let id = parse_id(id)?;
    state.conversation_service.delete(&id).await?;

    if json {
        println!("{}", serde_json::json!({"ok": true, "id": id.to_string()}));
        return Ok(());
    }

    println!();
    println!(
        "  {} Conversation {} deleted",
        style("✓").green().bold(),
        style(id).dim()
    );
    println!();

    Ok(())
}
