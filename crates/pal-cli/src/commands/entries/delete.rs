use log::info;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::confirm_delete;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let author = ctx.author(args.author.as_deref())?;
    let project = if args.all_projects {
        None
    } else {
        Some(ctx.project(args.project.as_deref())?)
    };

    let mut store = ctx.open_existing_store()?;
    if !args.force {
        let prompt = match project {
            Some(ref project) => format!(
                "Delete every entry by '{}' in project '{}'?",
                author, project
            ),
            None => format!("Delete every entry by '{}' across all projects?", author),
        };
        if !confirm_delete(&prompt, args.no_input)? {
            if !ctx.quiet() {
                println!("Cancelled");
            }
            return Ok(());
        }
    }

    let removed = store.delete_by_author_and_project(&author, project.as_deref())?;
    info!(
        "deleted {} entries for {}/{}",
        removed,
        author,
        project.as_deref().unwrap_or("*")
    );

    if !ctx.quiet() {
        println!("Deleted {} entries", removed);
    }
    Ok(())
}
