use log::info;

use pal_core::time::parse_timestamp;
use pal_core::NewEntry;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::read_entry_text;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let text = read_entry_text(&args.text, args.body.as_deref())?;
    let author = ctx.author(args.author.as_deref())?;
    let project = ctx.project(args.project.as_deref())?;

    let mut new_entry = NewEntry::new(text, author, project);
    if let Some(ref value) = args.date {
        new_entry = new_entry.with_timestamp(parse_timestamp(value)?);
    }

    let mut store = ctx.open_store()?;
    let entry = store.create(&new_entry)?;
    info!("added entry {} to {}/{}", entry.id, entry.author, entry.project);

    if !ctx.quiet() {
        println!("Added entry {}", entry.id);
    }
    Ok(())
}
