use std::io;

use anyhow::Result;
use howto_checklist::checklist::Checklist;

pub fn run(json: bool) -> Result<()> {
    Checklist::STANDARD.print_to(&mut io::stdout().lock(), json)
}
