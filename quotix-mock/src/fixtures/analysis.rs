use quotix_core::RecommendationPeriod;

pub fn by_symbol(s: &str) -> Vec<RecommendationPeriod> {
    if s == "EMPTY" {
        return vec![];
    }
    vec![
        RecommendationPeriod {
            period: "0m".to_string(),
            strong_buy: Some(5),
            buy: Some(10),
            hold: Some(8),
            sell: Some(2),
            strong_sell: Some(1),
        },
        RecommendationPeriod {
            period: "-1m".to_string(),
            strong_buy: Some(4),
            buy: Some(11),
            hold: Some(7),
            sell: None,
            strong_sell: Some(1),
        },
    ]
}
