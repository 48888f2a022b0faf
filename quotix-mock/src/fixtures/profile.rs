use quotix_core::CompanyProfile;

pub fn by_symbol(s: &str) -> Option<CompanyProfile> {
    let (name, sector, industry) = match s {
        "AAPL" => ("Apple Inc.", "Technology", "Consumer Electronics"),
        "MSFT" => (
            "Microsoft Corp",
            "Technology",
            "Software - Infrastructure",
        ),
        "GOOGL" => (
            "Alphabet Inc. Class A",
            "Communication Services",
            "Internet Content & Information",
        ),
        // Quote resolves but the profile endpoint has nothing for it.
        "IPOX" | "EMPTY" => return None,
        _ => ("Generic Corp", "Technology", "Software"),
    };
    Some(CompanyProfile {
        name: Some(name.to_string()),
        sector: Some(sector.to_string()),
        industry: Some(industry.to_string()),
        country: Some("United States".to_string()),
        website: None,
        summary: Some(format!("{name} designs, manufactures, and markets products worldwide.")),
    })
}
