//! Print the OpenAPI document as JSON.

use std::io::Write;

use utoipa::OpenApi;
use workouts_backend::doc::ApiDoc;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let document = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{document}")?;
    Ok(())
}
