//! Keyword aliases used to expand free-text search terms.

pub static SEARCH_ALIASES: &[(&str, &[&str])] = &[
    ("nasa", &["national aeronautics and space administration", "nasa"]),
    ("navy", &["department of the navy", "navy", "dept of the navy", "naval", "navfac"]),
    ("army", &["department of the army", "army", "dept of the army", "military"]),
    ("air force", &["department of the air force", "air force", "dept of the air force", "usaf"]),
    ("defense", &["department of defense", "dod", "defense", "military", "defense department"]),
    ("homeland security", &["department of homeland security", "dhs", "homeland security", "border security"]),
    ("energy", &["department of energy", "doe", "energy", "nuclear", "renewable energy"]),
    ("health", &["department of health and human services", "hhs", "health", "medical", "healthcare"]),
    ("treasury", &["department of the treasury", "treasury", "irs", "tax", "financial"]),
    ("interior", &["department of the interior", "interior", "national parks", "land management"]),
    ("agriculture", &["department of agriculture", "usda", "agriculture", "farming", "food"]),
    ("commerce", &["department of commerce", "commerce", "trade", "economic development"]),
    ("labor", &["department of labor", "labor", "employment", "workforce"]),
    ("transportation", &["department of transportation", "dot", "transportation", "highway", "aviation"]),
    ("education", &["department of education", "education", "schools", "universities"]),
    ("veterans", &["department of veterans affairs", "va", "veterans", "veteran affairs"]),
    ("justice", &["department of justice", "doj", "justice", "law enforcement", "fbi"]),
    ("state", &["department of state", "state department", "diplomacy", "foreign affairs"]),
    ("epa", &["environmental protection agency", "epa", "environmental", "pollution"]),
    ("gsa", &["general services administration", "gsa", "government services", "federal buildings"]),
    ("ssa", &["social security administration", "ssa", "social security", "benefits"]),
    ("opm", &["office of personnel management", "opm", "personnel", "human resources"]),
    ("nrc", &["nuclear regulatory commission", "nrc", "nuclear", "regulatory"]),
    ("fcc", &["federal communications commission", "fcc", "communications", "telecommunications"]),
    ("expiring", &["expiring", "ending", "completion", "award completion date", "contract end", "termination"]),
    ("expired", &["expired", "completed", "finished", "terminated", "closed"]),
    ("active", &["active", "current", "ongoing", "in progress", "live"]),
    ("recent", &["recent", "new", "latest", "fresh", "modern"]),
    ("old", &["old", "historical", "past", "legacy", "archived"]),
    ("this year", &["this year", "current year", "2024", "2025"]),
    ("last year", &["last year", "previous year", "2023", "2022"]),
    ("next year", &["next year", "upcoming year", "2025", "2026"]),
    ("large", &["large", "big", "high value", "expensive", "major", "significant"]),
    ("small", &["small", "low value", "cheap", "inexpensive", "minor", "minimal"]),
    ("million", &["million", "millions", "1m", "2m", "multi-million"]),
    ("billion", &["billion", "billions", "1b", "2b", "multi-billion"]),
    ("thousand", &["thousand", "thousands", "1k", "2k", "multi-thousand"]),
    ("high value", &["high value", "expensive", "costly", "premium", "valuable"]),
    ("low value", &["low value", "cheap", "inexpensive", "budget", "affordable"]),
    ("small business", &["small business", "small", "sba", "small company", "small firm"]),
    ("large business", &["large business", "large", "big business", "major company", "corporation"]),
    ("8a", &["8a", "8(a)", "eight a", "8a program", "disadvantaged business"]),
    ("women owned", &["women owned", "women-owned", "wosb", "women's business", "female owned"]),
    ("veteran owned", &["veteran owned", "veteran-owned", "vosb", "veteran's business", "military owned"]),
    ("minority owned", &["minority owned", "minority-owned", "minority business", "diverse owned"]),
    ("disadvantaged", &["disadvantaged", "sdb", "small disadvantaged business", "economically disadvantaged"]),
    ("hubzone", &["hubzone", "h.u.b.zone", "historically underutilized", "rural business"]),
    ("service disabled", &["service disabled", "service-disabled", "disabled veteran", "sdvosb"]),
    ("fixed price", &["fixed price", "firm fixed price", "ffp", "lump sum", "set price"]),
    ("cost plus", &["cost plus", "cost-plus", "cost reimbursement", "cost plus fixed fee", "cpff"]),
    ("time and materials", &["time and materials", "t&m", "time and material", "hourly rate"]),
    ("delivery order", &["delivery order", "task order", "idv", "indefinite delivery", "blanket purchase"]),
    ("task order", &["task order", "delivery order", "idv", "work order", "service order"]),
    ("purchase order", &["purchase order", "po", "buy", "procurement"]),
    ("modification", &["modification", "mod", "change order", "amendment", "revision"]),
    ("competitive", &["competitive", "full and open", "competed", "bidding", "auction"]),
    ("non-competitive", &["non-competitive", "noncompetitive", "sole source", "single source", "no competition"]),
    ("set aside", &["set aside", "set-aside", "reserved", "restricted", "limited competition"]),
    ("full and open", &["full and open", "unrestricted", "open competition", "public bidding"]),
    ("sole source", &["sole source", "single source", "no competition", "direct award"]),
    ("construction", &["construction", "building", "infrastructure", "facility", "renovation"]),
    ("maintenance", &["maintenance", "repair", "service", "upkeep", "support"]),
    ("consulting", &["consulting", "advisory", "professional services", "expertise", "consultant"]),
    ("training", &["training", "education", "instruction", "learning", "development"]),
    ("research", &["research", "development", "rd", "r&d", "study", "analysis"]),
    ("software", &["software", "it", "information technology", "programming", "development"]),
    ("hardware", &["hardware", "equipment", "machinery", "devices", "systems"]),
    ("supplies", &["supplies", "materials", "equipment", "goods", "products"]),
    ("security", &["security", "protection", "safety", "guarding", "defense"]),
    ("medical", &["medical", "healthcare", "health", "clinical", "therapeutic"]),
    ("domestic", &["domestic", "u.s.", "united states", "american", "local"]),
    ("foreign", &["foreign", "international", "overseas", "global", "non-domestic"]),
    ("california", &["california", "ca", "cal", "golden state"]),
    ("texas", &["texas", "tx", "tex", "lone star state"]),
    ("new york", &["new york", "ny", "empire state"]),
    ("florida", &["florida", "fl", "sunshine state"]),
    ("washington", &["washington", "wa", "evergreen state"]),
    ("virginia", &["virginia", "va", "old dominion"]),
    ("maryland", &["maryland", "md", "old line state"]),
    ("colorado", &["colorado", "co", "centennial state"]),
    ("completed", &["completed", "finished", "done", "closed", "terminated"]),
    ("cancelled", &["cancelled", "canceled", "terminated", "stopped", "discontinued"]),
    ("pending", &["pending", "waiting", "on hold", "suspended", "delayed"]),
    ("obligated", &["obligated", "committed", "spent", "funded", "allocated"]),
    ("unobligated", &["unobligated", "uncommitted", "available", "remaining", "unspent"]),
    ("current", &["current", "present", "now", "today", "latest"]),
    ("total", &["total", "complete", "full", "entire", "overall"]),
    ("base", &["base", "basic", "fundamental", "core", "primary"]),
    ("options", &["options", "optional", "potential", "future", "additional"]),
    ("on time", &["on time", "timely", "schedule", "deadline", "due date"]),
    ("delayed", &["delayed", "late", "behind schedule", "overdue", "extended"]),
    ("ahead of schedule", &["ahead of schedule", "early", "premature", "accelerated"]),
    ("quality", &["quality", "excellent", "superior", "high quality", "premium"]),
    ("poor", &["poor", "low quality", "inferior", "substandard", "deficient"]),
    ("emergency", &["emergency", "urgent", "crisis", "critical", "immediate"]),
    ("disaster", &["disaster", "catastrophe", "emergency response", "recovery", "relief"]),
    ("covid", &["covid", "covid-19", "coronavirus", "pandemic", "health emergency"]),
    ("ai", &["ai", "artificial intelligence", "machine learning", "automation"]),
    ("cloud", &["cloud", "cloud computing", "saas", "software as a service"]),
    ("cybersecurity", &["cybersecurity", "security", "information security", "cyber", "protection"]),
    ("data", &["data", "analytics", "big data", "information", "statistics"]),
    ("mobile", &["mobile", "smartphone", "app", "application", "ios", "android"]),
    ("aerospace", &["aerospace", "aviation", "aircraft", "space", "satellite"]),
    ("healthcare", &["healthcare", "medical", "health", "clinical", "patient care"]),
    ("environmental", &["environmental", "cleanup", "remediation", "pollution", "sustainability"]),
];
