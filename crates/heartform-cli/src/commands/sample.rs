use anyhow::Result;
use heartform_rules::SampleProfile;

pub fn execute(profile: SampleProfile, json: bool) -> Result<()> {
    let named = profile.values().to_named();

    if json {
        println!("{}", serde_json::to_string_pretty(&named)?);
    } else {
        println!("# {}", profile.summary());
        print!("{}", toml::to_string(&named)?);
    }
    Ok(())
}
