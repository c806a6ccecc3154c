//! Saved lines and bios

use rizzmaster_core::SaveToggle;
use rizzmaster_domain::{Result as DomainResult, SavedItem, SavedItemKind};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn toggle_saved(
    ctx: &AppContext,
    content: &str,
    kind: SavedItemKind,
) -> DomainResult<SaveToggle> {
    execute_command(ctx, "saved::toggle_saved", || ctx.saved.toggle_save(content, kind)).await
}

pub async fn delete_saved(ctx: &AppContext, id: &str) -> DomainResult<()> {
    execute_command(ctx, "saved::delete_saved", || ctx.saved.delete(id)).await
}

pub async fn list_saved(ctx: &AppContext) -> DomainResult<Vec<SavedItem>> {
    execute_command(ctx, "saved::list_saved", || async { Ok(ctx.saved.list()) }).await
}

pub async fn is_saved(ctx: &AppContext, content: &str) -> DomainResult<bool> {
    execute_command(ctx, "saved::is_saved", || async { Ok(ctx.saved.is_saved(content)) }).await
}
