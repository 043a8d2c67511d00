//! Compiled-in mock content.
//!
//! The figures are static and shared by every caller regardless of phone
//! number or location.

use crate::models::{ContentEntry, Topic};

const TOPIC_MENU: &str = "\
WEATHER - Weather forecast
PRICES - Market prices
BORDER - Border status
ROUTES - Travel routes
CULTURE - Cultural tips
FARMING - Farming tips
EMERGENCY - Emergency contacts";

pub fn builtin_entries() -> Vec<ContentEntry> {
    use Topic::*;

    vec![
        ContentEntry::new(
            Weather,
            "Weather Forecast:\n\
             Nairobi: 28°C, Sunny\n\
             Kampala: 26°C, Partly cloudy\n\
             Kigali: 24°C, Light showers\n\
             Rain expected tomorrow 3PM",
            vec![Farming, Prices, Routes],
        ),
        ContentEntry::new(
            Prices,
            "Market Prices (per 90kg bag):\n\
             Maize: KES 3,200\n\
             Beans: KES 7,500\n\
             Rice: KES 9,800\n\
             Potatoes: KES 2,400",
            vec![Weather, Border, Culture],
        ),
        ContentEntry::new(
            Farming,
            "Farming Tips:\n\
             - Plant maize at the onset of the long rains\n\
             - Top dress 4-6 weeks after planting\n\
             - Dry grain well before storage",
            vec![Weather, Prices],
        ),
        ContentEntry::new(
            Border,
            "Border Status:\n\
             Busia: Open, 2hr wait\n\
             Malaba: Open, 4hr wait\n\
             Namanga: Open, 1hr wait\n\
             Hours: 6AM - 10PM",
            vec![Routes, Prices, Emergency],
        ),
        ContentEntry::new(
            Documents,
            "Required Documents:\n\
             - National ID or Passport\n\
             - Certificate of Origin\n\
             - Simplified Trade Regime form\n\
             - Phytosanitary certificate for produce",
            vec![Border, Routes],
        ),
        ContentEntry::new(
            Routes,
            "Route Conditions:\n\
             Nairobi-Busia: Clear, 7hrs\n\
             Nairobi-Namanga: Roadworks near Kajiado\n\
             Kampala-Malaba: Clear, 4hrs",
            vec![Border, Weather, Emergency],
        ),
        ContentEntry::new(
            Culture,
            "Cultural Tips:\n\
             - Greet elders first with a handshake\n\
             - Give and receive with your right hand\n\
             - Dress modestly at markets and in rural areas",
            vec![Routes, Help],
        ),
        ContentEntry::new(
            PhrasesSwahili,
            "Swahili Phrases:\n\
             Hello - Jambo\n\
             Thank you - Asante\n\
             How much? - Bei gani?",
            vec![Culture],
        ),
        ContentEntry::new(
            PhrasesLuganda,
            "Luganda Phrases:\n\
             Hello - Oli otya\n\
             Thank you - Webale\n\
             How much? - Sente meka?",
            vec![Culture],
        ),
        ContentEntry::new(
            Emergency,
            "Emergency Contacts:\n\
             Police: 999\n\
             Ambulance: 112\n\
             Fire: 999\n\
             Toll-free helpline: 1195",
            vec![Routes, Help],
        ),
        ContentEntry::new(
            Help,
            format!("Available services:\n{TOPIC_MENU}\nOr dial *123# for the full menu."),
            vec![],
        ),
        ContentEntry::new(Goodbye, "Thank you for using FieldLine. Goodbye!", vec![]),
        ContentEntry::new(
            General,
            format!("AI Assistant: You asked \"{{message}}\".\nI can help with:\n{TOPIC_MENU}"),
            vec![Help],
        ),
    ]
}
