//! `workbook-template` command-line tool

use workbook_service::cli::TemplateApp;

fn main() -> anyhow::Result<()> {
    TemplateApp::from_args().run()
}
