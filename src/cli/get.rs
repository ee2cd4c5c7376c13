use std::io;

use azcred::broker::AzureCliBroker;
use azcred::config::Settings;
use azcred::error::Result;
use azcred::request::CredentialRequest;
use azcred::resolve::Resolver;

pub fn run() -> Result<()> {
    let settings = Settings::load();

    let request = CredentialRequest::parse(io::stdin().lock())?;

    let outcome = Resolver::new(&settings).resolve(&request, AzureCliBroker::new)?;
    outcome.write_to(&mut io::stdout().lock())
}
