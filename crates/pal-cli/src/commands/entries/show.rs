use pal_core::PalError;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::print_entry;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_existing_store()?;
    let entry = match store.find_by_id(args.id) {
        Ok(entry) => entry,
        Err(PalError::NotFound(id)) => {
            return Err(CliError::not_found(
                format!("Entry {} not found", id),
                "Hint: Run `pal list` to find entry IDs.",
            )
            .into())
        }
        Err(err) => return Err(err.into()),
    };
    print_entry(&entry, args.json)
}
