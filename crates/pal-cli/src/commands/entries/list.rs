use std::cmp::Reverse;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::print_entry_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let author = ctx.author(args.author.as_deref())?;
    let project = ctx.project(args.project.as_deref())?;

    let store = ctx.open_existing_store()?;
    // The store truncates in storage order, so --limit is applied after sorting.
    let mut entries = store.find_by_author_and_project(&author, &project, None)?;
    entries.sort_by_key(|entry| Reverse((entry.timestamp, entry.id)));
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    print_entry_list(&entries, args.json, format, ctx.quiet())
}
