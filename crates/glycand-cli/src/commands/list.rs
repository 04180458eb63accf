use crate::error::Result;
use glycand::core::chem::digestion::DIGESTIONS;
use glycand::core::chem::motifs::GLYCOSYLATION_MOTIFS;

pub fn digestions() -> Result<()> {
    let width = DIGESTIONS.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for rule in DIGESTIONS {
        println!("{:width$}  {}", rule.name, rule.description);
    }
    Ok(())
}

pub fn motifs() -> Result<()> {
    let mut entries: Vec<(&str, &str)> = GLYCOSYLATION_MOTIFS
        .entries()
        .map(|(&name, &pattern)| (name, pattern))
        .collect();
    entries.sort_unstable();
    for (name, pattern) in entries {
        println!("{name}  {pattern}");
    }
    Ok(())
}
