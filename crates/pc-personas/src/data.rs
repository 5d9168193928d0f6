//! Built-in persona tables: metadata, compatibility tiers and typical profiles.

use crate::catalog::{PersonaCatalog, TierRow, TypicalProfile};
use pc_core::types::{
    CapacityLevel, ConflictApproach, Driver, Gender, PersonaCode, PersonaMetadata, RepairMode,
    RepairSpeed, Tier,
};

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn code(raw: &str) -> PersonaCode {
    PersonaCode::parse(raw).unwrap_or_default()
}

fn men_personas() -> Vec<PersonaMetadata> {
    vec![
        PersonaMetadata {
            code: code("ACEG"),
            name: "The Captain".into(),
            traits: "Athletic, magnetic, restless and traditional".into(),
            dating_behavior: s(&[
                "Plans active dates: hikes, climbing gyms, morning runs",
                "Makes the first move and keeps momentum",
                "Suggests spontaneous trips early on",
                "Takes the lead on planning and paying",
            ]),
            in_relationships: s(&[
                "Brings energy and structure to shared routines",
                "Keeps the couple's social calendar full",
                "Pushes the relationship toward new experiences",
                "Takes ownership of providing and protecting",
            ]),
            most_attractive: s(&[
                "Effortless glamour and attention to detail",
                "A calm serenity that steadies him",
                "Ambition and a career she is proud of",
                "Shared respect for tradition",
            ]),
            least_attractive: s(&[
                "Needing to be the centre of attention",
                "Keeping him at arm's length",
            ]),
            struggles: s(&[
                "Can dominate conversations without noticing",
                "Gets restless when life settles down",
                "Can be rigid about roles",
            ]),
        },
        PersonaMetadata {
            code: code("ACEH"),
            name: "The Trailblazer".into(),
            traits: "Athletic, magnetic, restless and egalitarian".into(),
            dating_behavior: s(&[
                "Plans active dates: hikes, climbing gyms, morning runs",
                "Makes the first move and keeps momentum",
                "Suggests spontaneous trips early on",
                "Splits planning and expects the same in return",
            ]),
            in_relationships: s(&[
                "Brings energy and structure to shared routines",
                "Keeps the couple's social calendar full",
                "Pushes the relationship toward new experiences",
                "Treats every big decision as a joint one",
            ]),
            most_attractive: s(&[
                "Effortless glamour and attention to detail",
                "A calm serenity that steadies him",
                "Ambition and a career she is proud of",
                "Independence and a full life of her own",
            ]),
            least_attractive: s(&[
                "Needing to be the centre of attention",
                "Old-fashioned expectations",
            ]),
            struggles: s(&[
                "Can dominate conversations without noticing",
                "Gets restless when life settles down",
                "May avoid taking the lead when it is needed",
            ]),
        },
        PersonaMetadata {
            code: code("ACFG"),
            name: "The Provider".into(),
            traits: "Athletic, magnetic, dependable and traditional".into(),
            dating_behavior: s(&[
                "Plans active dates: hikes, climbing gyms, morning runs",
                "Makes the first move and keeps momentum",
                "Keeps a predictable rhythm of calls and plans",
                "Takes the lead on planning and paying",
            ]),
            in_relationships: s(&[
                "Brings energy and structure to shared routines",
                "Keeps the couple's social calendar full",
                "Builds a dependable home base",
                "Takes ownership of providing and protecting",
            ]),
            most_attractive: s(&[
                "Effortless glamour and attention to detail",
                "A calm serenity that steadies him",
                "A love of homemaking and a warm base",
                "Shared respect for tradition",
            ]),
            least_attractive: s(&[
                "Needing to be the centre of attention",
                "Keeping him at arm's length",
            ]),
            struggles: s(&[
                "Can dominate conversations without noticing",
                "Resists change even when it is overdue",
                "Can be rigid about roles",
            ]),
        },
        PersonaMetadata {
            code: code("ACFH"),
            name: "The Coach".into(),
            traits: "Athletic, magnetic, dependable and egalitarian".into(),
            dating_behavior: s(&[
                "Plans active dates: hikes, climbing gyms, morning runs",
                "Makes the first move and keeps momentum",
                "Keeps a predictable rhythm of calls and plans",
                "Splits planning and expects the same in return",
            ]),
            in_relationships: s(&[
                "Brings energy and structure to shared routines",
                "Keeps the couple's social calendar full",
                "Builds a dependable home base",
                "Treats every big decision as a joint one",
            ]),
            most_attractive: s(&[
                "Effortless glamour and attention to detail",
                "A calm serenity that steadies him",
                "A love of homemaking and a warm base",
                "Independence and a full life of her own",
            ]),
            least_attractive: s(&[
                "Needing to be the centre of attention",
                "Old-fashioned expectations",
            ]),
            struggles: s(&[
                "Can dominate conversations without noticing",
                "Resists change even when it is overdue",
                "May avoid taking the lead when it is needed",
            ]),
        },
        PersonaMetadata {
            code: code("ADEG"),
            name: "The Ranger".into(),
            traits: "Athletic, observant, restless and traditional".into(),
            dating_behavior: s(&[
                "Plans active dates: hikes, climbing gyms, morning runs",
                "Waits for clear signals before showing interest",
                "Suggests spontaneous trips early on",
                "Takes the lead on planning and paying",
            ]),
            in_relationships: s(&[
                "Brings energy and structure to shared routines",
                "Shows love through attention rather than words",
                "Pushes the relationship toward new experiences",
                "Takes ownership of providing and protecting",
            ]),
            most_attractive: s(&[
                "Effortless glamour and attention to detail",
                "Vivacity that lifts the whole room",
                "Ambition and a career she is proud of",
                "Shared respect for tradition",
            ]),
            least_attractive: s(&[
                "Coldness mistaken for calm",
                "Keeping him at arm's length",
            ]),
            struggles: s(&[
                "Holds back feelings until they pile up",
                "Gets restless when life settles down",
                "Can be rigid about roles",
            ]),
        },
        PersonaMetadata {
            code: code("ADEH"),
            name: "The Explorer".into(),
            traits: "Athletic, observant, restless and egalitarian".into(),
            dating_behavior: s(&[
                "Plans active dates: hikes, climbing gyms, morning runs",
                "Waits for clear signals before showing interest",
                "Suggests spontaneous trips early on",
                "Splits planning and expects the same in return",
            ]),
            in_relationships: s(&[
                "Brings energy and structure to shared routines",
                "Shows love through attention rather than words",
                "Pushes the relationship toward new experiences",
                "Treats every big decision as a joint one",
            ]),
            most_attractive: s(&[
                "Effortless glamour and attention to detail",
                "Vivacity that lifts the whole room",
                "Ambition and a career she is proud of",
                "Independence and a full life of her own",
            ]),
            least_attractive: s(&[
                "Coldness mistaken for calm",
                "Old-fashioned expectations",
            ]),
            struggles: s(&[
                "Holds back feelings until they pile up",
                "Gets restless when life settles down",
                "May avoid taking the lead when it is needed",
            ]),
        },
        PersonaMetadata {
            code: code("ADFG"),
            name: "The Guardian".into(),
            traits: "Athletic, observant, dependable and traditional".into(),
            dating_behavior: s(&[
                "Plans active dates: hikes, climbing gyms, morning runs",
                "Waits for clear signals before showing interest",
                "Keeps a predictable rhythm of calls and plans",
                "Takes the lead on planning and paying",
            ]),
            in_relationships: s(&[
                "Brings energy and structure to shared routines",
                "Shows love through attention rather than words",
                "Builds a dependable home base",
                "Takes ownership of providing and protecting",
            ]),
            most_attractive: s(&[
                "Effortless glamour and attention to detail",
                "Vivacity that lifts the whole room",
                "A love of homemaking and a warm base",
                "Shared respect for tradition",
            ]),
            least_attractive: s(&[
                "Coldness mistaken for calm",
                "Keeping him at arm's length",
            ]),
            struggles: s(&[
                "Holds back feelings until they pile up",
                "Resists change even when it is overdue",
                "Can be rigid about roles",
            ]),
        },
        PersonaMetadata {
            code: code("ADFH"),
            name: "The Craftsman".into(),
            traits: "Athletic, observant, dependable and egalitarian".into(),
            dating_behavior: s(&[
                "Plans active dates: hikes, climbing gyms, morning runs",
                "Waits for clear signals before showing interest",
                "Keeps a predictable rhythm of calls and plans",
                "Splits planning and expects the same in return",
            ]),
            in_relationships: s(&[
                "Brings energy and structure to shared routines",
                "Shows love through attention rather than words",
                "Builds a dependable home base",
                "Treats every big decision as a joint one",
            ]),
            most_attractive: s(&[
                "Effortless glamour and attention to detail",
                "Vivacity that lifts the whole room",
                "A love of homemaking and a warm base",
                "Independence and a full life of her own",
            ]),
            least_attractive: s(&[
                "Coldness mistaken for calm",
                "Old-fashioned expectations",
            ]),
            struggles: s(&[
                "Holds back feelings until they pile up",
                "Resists change even when it is overdue",
                "May avoid taking the lead when it is needed",
            ]),
        },
        PersonaMetadata {
            code: code("BCEG"),
            name: "The Statesman".into(),
            traits: "Grounded, magnetic, restless and traditional".into(),
            dating_behavior: s(&[
                "Prefers slow dinners and long conversations",
                "Makes the first move and keeps momentum",
                "Suggests spontaneous trips early on",
                "Takes the lead on planning and paying",
            ]),
            in_relationships: s(&[
                "Acts as the steady voice when things get loud",
                "Keeps the couple's social calendar full",
                "Pushes the relationship toward new experiences",
                "Takes ownership of providing and protecting",
            ]),
            most_attractive: s(&[
                "A natural look and an unfussy style",
                "A calm serenity that steadies him",
                "Ambition and a career she is proud of",
                "Shared respect for tradition",
            ]),
            least_attractive: s(&[
                "Needing to be the centre of attention",
                "Keeping him at arm's length",
            ]),
            struggles: s(&[
                "Can dominate conversations without noticing",
                "Gets restless when life settles down",
                "Can be rigid about roles",
            ]),
        },
        PersonaMetadata {
            code: code("BCEH"),
            name: "The Maverick".into(),
            traits: "Grounded, magnetic, restless and egalitarian".into(),
            dating_behavior: s(&[
                "Prefers slow dinners and long conversations",
                "Makes the first move and keeps momentum",
                "Suggests spontaneous trips early on",
                "Splits planning and expects the same in return",
            ]),
            in_relationships: s(&[
                "Acts as the steady voice when things get loud",
                "Keeps the couple's social calendar full",
                "Pushes the relationship toward new experiences",
                "Treats every big decision as a joint one",
            ]),
            most_attractive: s(&[
                "A natural look and an unfussy style",
                "A calm serenity that steadies him",
                "Ambition and a career she is proud of",
                "Independence and a full life of her own",
            ]),
            least_attractive: s(&[
                "Needing to be the centre of attention",
                "Old-fashioned expectations",
            ]),
            struggles: s(&[
                "Can dominate conversations without noticing",
                "Gets restless when life settles down",
                "May avoid taking the lead when it is needed",
            ]),
        },
        PersonaMetadata {
            code: code("BCFG"),
            name: "The Anchor".into(),
            traits: "Grounded, magnetic, dependable and traditional".into(),
            dating_behavior: s(&[
                "Prefers slow dinners and long conversations",
                "Makes the first move and keeps momentum",
                "Keeps a predictable rhythm of calls and plans",
                "Takes the lead on planning and paying",
            ]),
            in_relationships: s(&[
                "Acts as the steady voice when things get loud",
                "Keeps the couple's social calendar full",
                "Builds a dependable home base",
                "Takes ownership of providing and protecting",
            ]),
            most_attractive: s(&[
                "A natural look and an unfussy style",
                "A calm serenity that steadies him",
                "A love of homemaking and a warm base",
                "Shared respect for tradition",
            ]),
            least_attractive: s(&[
                "Needing to be the centre of attention",
                "Keeping him at arm's length",
            ]),
            struggles: s(&[
                "Can dominate conversations without noticing",
                "Resists change even when it is overdue",
                "Can be rigid about roles",
            ]),
        },
        PersonaMetadata {
            code: code("BCFH"),
            name: "The Diplomat".into(),
            traits: "Grounded, magnetic, dependable and egalitarian".into(),
            dating_behavior: s(&[
                "Prefers slow dinners and long conversations",
                "Makes the first move and keeps momentum",
                "Keeps a predictable rhythm of calls and plans",
                "Splits planning and expects the same in return",
            ]),
            in_relationships: s(&[
                "Acts as the steady voice when things get loud",
                "Keeps the couple's social calendar full",
                "Builds a dependable home base",
                "Treats every big decision as a joint one",
            ]),
            most_attractive: s(&[
                "A natural look and an unfussy style",
                "A calm serenity that steadies him",
                "A love of homemaking and a warm base",
                "Independence and a full life of her own",
            ]),
            least_attractive: s(&[
                "Needing to be the centre of attention",
                "Old-fashioned expectations",
            ]),
            struggles: s(&[
                "Can dominate conversations without noticing",
                "Resists change even when it is overdue",
                "May avoid taking the lead when it is needed",
            ]),
        },
        PersonaMetadata {
            code: code("BDEG"),
            name: "The Wanderer".into(),
            traits: "Grounded, observant, restless and traditional".into(),
            dating_behavior: s(&[
                "Prefers slow dinners and long conversations",
                "Waits for clear signals before showing interest",
                "Suggests spontaneous trips early on",
                "Takes the lead on planning and paying",
            ]),
            in_relationships: s(&[
                "Acts as the steady voice when things get loud",
                "Shows love through attention rather than words",
                "Pushes the relationship toward new experiences",
                "Takes ownership of providing and protecting",
            ]),
            most_attractive: s(&[
                "A natural look and an unfussy style",
                "Vivacity that lifts the whole room",
                "Ambition and a career she is proud of",
                "Shared respect for tradition",
            ]),
            least_attractive: s(&[
                "Coldness mistaken for calm",
                "Keeping him at arm's length",
            ]),
            struggles: s(&[
                "Holds back feelings until they pile up",
                "Gets restless when life settles down",
                "Can be rigid about roles",
            ]),
        },
        PersonaMetadata {
            code: code("BDEH"),
            name: "The Philosopher".into(),
            traits: "Grounded, observant, restless and egalitarian".into(),
            dating_behavior: s(&[
                "Prefers slow dinners and long conversations",
                "Waits for clear signals before showing interest",
                "Suggests spontaneous trips early on",
                "Splits planning and expects the same in return",
            ]),
            in_relationships: s(&[
                "Acts as the steady voice when things get loud",
                "Shows love through attention rather than words",
                "Pushes the relationship toward new experiences",
                "Treats every big decision as a joint one",
            ]),
            most_attractive: s(&[
                "A natural look and an unfussy style",
                "Vivacity that lifts the whole room",
                "Ambition and a career she is proud of",
                "Independence and a full life of her own",
            ]),
            least_attractive: s(&[
                "Coldness mistaken for calm",
                "Old-fashioned expectations",
            ]),
            struggles: s(&[
                "Holds back feelings until they pile up",
                "Gets restless when life settles down",
                "May avoid taking the lead when it is needed",
            ]),
        },
        PersonaMetadata {
            code: code("BDFG"),
            name: "The Steward".into(),
            traits: "Grounded, observant, dependable and traditional".into(),
            dating_behavior: s(&[
                "Prefers slow dinners and long conversations",
                "Waits for clear signals before showing interest",
                "Keeps a predictable rhythm of calls and plans",
                "Takes the lead on planning and paying",
            ]),
            in_relationships: s(&[
                "Acts as the steady voice when things get loud",
                "Shows love through attention rather than words",
                "Builds a dependable home base",
                "Takes ownership of providing and protecting",
            ]),
            most_attractive: s(&[
                "A natural look and an unfussy style",
                "Vivacity that lifts the whole room",
                "A love of homemaking and a warm base",
                "Shared respect for tradition",
            ]),
            least_attractive: s(&[
                "Coldness mistaken for calm",
                "Keeping him at arm's length",
            ]),
            struggles: s(&[
                "Holds back feelings until they pile up",
                "Resists change even when it is overdue",
                "Can be rigid about roles",
            ]),
        },
        PersonaMetadata {
            code: code("BDFH"),
            name: "The Companion".into(),
            traits: "Grounded, observant, dependable and egalitarian".into(),
            dating_behavior: s(&[
                "Prefers slow dinners and long conversations",
                "Waits for clear signals before showing interest",
                "Keeps a predictable rhythm of calls and plans",
                "Splits planning and expects the same in return",
            ]),
            in_relationships: s(&[
                "Acts as the steady voice when things get loud",
                "Shows love through attention rather than words",
                "Builds a dependable home base",
                "Treats every big decision as a joint one",
            ]),
            most_attractive: s(&[
                "A natural look and an unfussy style",
                "Vivacity that lifts the whole room",
                "A love of homemaking and a warm base",
                "Independence and a full life of her own",
            ]),
            least_attractive: s(&[
                "Coldness mistaken for calm",
                "Old-fashioned expectations",
            ]),
            struggles: s(&[
                "Holds back feelings until they pile up",
                "Resists change even when it is overdue",
                "May avoid taking the lead when it is needed",
            ]),
        },
    ]
}

fn women_personas() -> Vec<PersonaMetadata> {
    vec![
        PersonaMetadata {
            code: code("ACEG"),
            name: "The Socialite".into(),
            traits: "Polished, vivacious, driven and traditional".into(),
            dating_behavior: s(&[
                "Puts real care into how she shows up for a date",
                "Flirts openly and enjoys the chase",
                "Fits dates around a demanding schedule",
                "Expects him to plan and lead",
            ]),
            in_relationships: s(&[
                "Keeps the couple looking and feeling put together",
                "Fills the relationship with warmth and noise",
                "Expects a partner who backs her goals",
                "Values clear roles and family rituals",
            ]),
            most_attractive: s(&[
                "A man who makes fitness part of his routine",
                "Thoughtful reserve that opens up over time",
                "An appetite for adventure and spontaneous plans",
                "Respect for tradition and family roles",
            ]),
            least_attractive: s(&[
                "Showing off to every room",
                "Indecision dressed up as fairness",
            ]),
            struggles: s(&[
                "Can feel unseen by quieter partners",
                "Lets work crowd out the relationship",
                "Struggles when a partner will not commit to roles",
            ]),
        },
        PersonaMetadata {
            code: code("ACEH"),
            name: "The Trendsetter".into(),
            traits: "Polished, vivacious, driven and independent".into(),
            dating_behavior: s(&[
                "Puts real care into how she shows up for a date",
                "Flirts openly and enjoys the chase",
                "Fits dates around a demanding schedule",
                "Happy to plan, pay and propose the next step",
            ]),
            in_relationships: s(&[
                "Keeps the couple looking and feeling put together",
                "Fills the relationship with warmth and noise",
                "Expects a partner who backs her goals",
                "Needs room for her own friends and plans",
            ]),
            most_attractive: s(&[
                "A man who makes fitness part of his routine",
                "Thoughtful reserve that opens up over time",
                "An appetite for adventure and spontaneous plans",
                "A true partnership where decisions are shared",
            ]),
            least_attractive: s(&[
                "Showing off to every room",
                "Rigid ideas about who does what",
            ]),
            struggles: s(&[
                "Can feel unseen by quieter partners",
                "Lets work crowd out the relationship",
                "Can read care as control",
            ]),
        },
        PersonaMetadata {
            code: code("ACFG"),
            name: "The Hostess".into(),
            traits: "Polished, vivacious, nurturing and traditional".into(),
            dating_behavior: s(&[
                "Puts real care into how she shows up for a date",
                "Flirts openly and enjoys the chase",
                "Invites dates into her home early",
                "Expects him to plan and lead",
            ]),
            in_relationships: s(&[
                "Keeps the couple looking and feeling put together",
                "Fills the relationship with warmth and noise",
                "Turns a shared space into a home",
                "Values clear roles and family rituals",
            ]),
            most_attractive: s(&[
                "A man who makes fitness part of his routine",
                "Thoughtful reserve that opens up over time",
                "Stability in work, habits and affection",
                "Respect for tradition and family roles",
            ]),
            least_attractive: s(&[
                "Showing off to every room",
                "Indecision dressed up as fairness",
            ]),
            struggles: s(&[
                "Can feel unseen by quieter partners",
                "Over-gives and then resents it",
                "Struggles when a partner will not commit to roles",
            ]),
        },
        PersonaMetadata {
            code: code("ACFH"),
            name: "The Muse".into(),
            traits: "Polished, vivacious, nurturing and independent".into(),
            dating_behavior: s(&[
                "Puts real care into how she shows up for a date",
                "Flirts openly and enjoys the chase",
                "Invites dates into her home early",
                "Happy to plan, pay and propose the next step",
            ]),
            in_relationships: s(&[
                "Keeps the couple looking and feeling put together",
                "Fills the relationship with warmth and noise",
                "Turns a shared space into a home",
                "Needs room for her own friends and plans",
            ]),
            most_attractive: s(&[
                "A man who makes fitness part of his routine",
                "Thoughtful reserve that opens up over time",
                "Stability in work, habits and affection",
                "A true partnership where decisions are shared",
            ]),
            least_attractive: s(&[
                "Showing off to every room",
                "Rigid ideas about who does what",
            ]),
            struggles: s(&[
                "Can feel unseen by quieter partners",
                "Over-gives and then resents it",
                "Can read care as control",
            ]),
        },
        PersonaMetadata {
            code: code("ADEG"),
            name: "The Achiever".into(),
            traits: "Polished, serene, driven and traditional".into(),
            dating_behavior: s(&[
                "Puts real care into how she shows up for a date",
                "Lets interest build quietly before committing",
                "Fits dates around a demanding schedule",
                "Expects him to plan and lead",
            ]),
            in_relationships: s(&[
                "Keeps the couple looking and feeling put together",
                "Creates calm when the week gets chaotic",
                "Expects a partner who backs her goals",
                "Values clear roles and family rituals",
            ]),
            most_attractive: s(&[
                "A man who makes fitness part of his routine",
                "Easy charisma in a room full of strangers",
                "An appetite for adventure and spontaneous plans",
                "Respect for tradition and family roles",
            ]),
            least_attractive: s(&[
                "Silence that never breaks",
                "Indecision dressed up as fairness",
            ]),
            struggles: s(&[
                "Withdraws instead of naming what hurts",
                "Lets work crowd out the relationship",
                "Struggles when a partner will not commit to roles",
            ]),
        },
        PersonaMetadata {
            code: code("ADEH"),
            name: "The Strategist".into(),
            traits: "Polished, serene, driven and independent".into(),
            dating_behavior: s(&[
                "Puts real care into how she shows up for a date",
                "Lets interest build quietly before committing",
                "Fits dates around a demanding schedule",
                "Happy to plan, pay and propose the next step",
            ]),
            in_relationships: s(&[
                "Keeps the couple looking and feeling put together",
                "Creates calm when the week gets chaotic",
                "Expects a partner who backs her goals",
                "Needs room for her own friends and plans",
            ]),
            most_attractive: s(&[
                "A man who makes fitness part of his routine",
                "Easy charisma in a room full of strangers",
                "An appetite for adventure and spontaneous plans",
                "A true partnership where decisions are shared",
            ]),
            least_attractive: s(&[
                "Silence that never breaks",
                "Rigid ideas about who does what",
            ]),
            struggles: s(&[
                "Withdraws instead of naming what hurts",
                "Lets work crowd out the relationship",
                "Can read care as control",
            ]),
        },
        PersonaMetadata {
            code: code("ADFG"),
            name: "The Matriarch".into(),
            traits: "Polished, serene, nurturing and traditional".into(),
            dating_behavior: s(&[
                "Puts real care into how she shows up for a date",
                "Lets interest build quietly before committing",
                "Invites dates into her home early",
                "Expects him to plan and lead",
            ]),
            in_relationships: s(&[
                "Keeps the couple looking and feeling put together",
                "Creates calm when the week gets chaotic",
                "Turns a shared space into a home",
                "Values clear roles and family rituals",
            ]),
            most_attractive: s(&[
                "A man who makes fitness part of his routine",
                "Easy charisma in a room full of strangers",
                "Stability in work, habits and affection",
                "Respect for tradition and family roles",
            ]),
            least_attractive: s(&[
                "Silence that never breaks",
                "Indecision dressed up as fairness",
            ]),
            struggles: s(&[
                "Withdraws instead of naming what hurts",
                "Over-gives and then resents it",
                "Struggles when a partner will not commit to roles",
            ]),
        },
        PersonaMetadata {
            code: code("ADFH"),
            name: "The Curator".into(),
            traits: "Polished, serene, nurturing and independent".into(),
            dating_behavior: s(&[
                "Puts real care into how she shows up for a date",
                "Lets interest build quietly before committing",
                "Invites dates into her home early",
                "Happy to plan, pay and propose the next step",
            ]),
            in_relationships: s(&[
                "Keeps the couple looking and feeling put together",
                "Creates calm when the week gets chaotic",
                "Turns a shared space into a home",
                "Needs room for her own friends and plans",
            ]),
            most_attractive: s(&[
                "A man who makes fitness part of his routine",
                "Easy charisma in a room full of strangers",
                "Stability in work, habits and affection",
                "A true partnership where decisions are shared",
            ]),
            least_attractive: s(&[
                "Silence that never breaks",
                "Rigid ideas about who does what",
            ]),
            struggles: s(&[
                "Withdraws instead of naming what hurts",
                "Over-gives and then resents it",
                "Can read care as control",
            ]),
        },
        PersonaMetadata {
            code: code("BCEG"),
            name: "The Champion".into(),
            traits: "Unfussy, vivacious, driven and traditional".into(),
            dating_behavior: s(&[
                "Keeps first dates casual and low-key",
                "Flirts openly and enjoys the chase",
                "Fits dates around a demanding schedule",
                "Expects him to plan and lead",
            ]),
            in_relationships: s(&[
                "Brings an easy, unpretentious comfort",
                "Fills the relationship with warmth and noise",
                "Expects a partner who backs her goals",
                "Values clear roles and family rituals",
            ]),
            most_attractive: s(&[
                "Quiet maturity and a settled sense of self",
                "Thoughtful reserve that opens up over time",
                "An appetite for adventure and spontaneous plans",
                "Respect for tradition and family roles",
            ]),
            least_attractive: s(&[
                "Showing off to every room",
                "Indecision dressed up as fairness",
            ]),
            struggles: s(&[
                "Can feel unseen by quieter partners",
                "Lets work crowd out the relationship",
                "Struggles when a partner will not commit to roles",
            ]),
        },
        PersonaMetadata {
            code: code("BCEH"),
            name: "The Free Spirit".into(),
            traits: "Unfussy, vivacious, driven and independent".into(),
            dating_behavior: s(&[
                "Keeps first dates casual and low-key",
                "Flirts openly and enjoys the chase",
                "Fits dates around a demanding schedule",
                "Happy to plan, pay and propose the next step",
            ]),
            in_relationships: s(&[
                "Brings an easy, unpretentious comfort",
                "Fills the relationship with warmth and noise",
                "Expects a partner who backs her goals",
                "Needs room for her own friends and plans",
            ]),
            most_attractive: s(&[
                "Quiet maturity and a settled sense of self",
                "Thoughtful reserve that opens up over time",
                "An appetite for adventure and spontaneous plans",
                "A true partnership where decisions are shared",
            ]),
            least_attractive: s(&[
                "Showing off to every room",
                "Rigid ideas about who does what",
            ]),
            struggles: s(&[
                "Can feel unseen by quieter partners",
                "Lets work crowd out the relationship",
                "Can read care as control",
            ]),
        },
        PersonaMetadata {
            code: code("BCFG"),
            name: "The Sweetheart".into(),
            traits: "Unfussy, vivacious, nurturing and traditional".into(),
            dating_behavior: s(&[
                "Keeps first dates casual and low-key",
                "Flirts openly and enjoys the chase",
                "Invites dates into her home early",
                "Expects him to plan and lead",
            ]),
            in_relationships: s(&[
                "Brings an easy, unpretentious comfort",
                "Fills the relationship with warmth and noise",
                "Turns a shared space into a home",
                "Values clear roles and family rituals",
            ]),
            most_attractive: s(&[
                "Quiet maturity and a settled sense of self",
                "Thoughtful reserve that opens up over time",
                "Stability in work, habits and affection",
                "Respect for tradition and family roles",
            ]),
            least_attractive: s(&[
                "Showing off to every room",
                "Indecision dressed up as fairness",
            ]),
            struggles: s(&[
                "Can feel unseen by quieter partners",
                "Over-gives and then resents it",
                "Struggles when a partner will not commit to roles",
            ]),
        },
        PersonaMetadata {
            code: code("BCFH"),
            name: "The Confidante".into(),
            traits: "Unfussy, vivacious, nurturing and independent".into(),
            dating_behavior: s(&[
                "Keeps first dates casual and low-key",
                "Flirts openly and enjoys the chase",
                "Invites dates into her home early",
                "Happy to plan, pay and propose the next step",
            ]),
            in_relationships: s(&[
                "Brings an easy, unpretentious comfort",
                "Fills the relationship with warmth and noise",
                "Turns a shared space into a home",
                "Needs room for her own friends and plans",
            ]),
            most_attractive: s(&[
                "Quiet maturity and a settled sense of self",
                "Thoughtful reserve that opens up over time",
                "Stability in work, habits and affection",
                "A true partnership where decisions are shared",
            ]),
            least_attractive: s(&[
                "Showing off to every room",
                "Rigid ideas about who does what",
            ]),
            struggles: s(&[
                "Can feel unseen by quieter partners",
                "Over-gives and then resents it",
                "Can read care as control",
            ]),
        },
        PersonaMetadata {
            code: code("BDEG"),
            name: "The Scholar".into(),
            traits: "Unfussy, serene, driven and traditional".into(),
            dating_behavior: s(&[
                "Keeps first dates casual and low-key",
                "Lets interest build quietly before committing",
                "Fits dates around a demanding schedule",
                "Expects him to plan and lead",
            ]),
            in_relationships: s(&[
                "Brings an easy, unpretentious comfort",
                "Creates calm when the week gets chaotic",
                "Expects a partner who backs her goals",
                "Values clear roles and family rituals",
            ]),
            most_attractive: s(&[
                "Quiet maturity and a settled sense of self",
                "Easy charisma in a room full of strangers",
                "An appetite for adventure and spontaneous plans",
                "Respect for tradition and family roles",
            ]),
            least_attractive: s(&[
                "Silence that never breaks",
                "Indecision dressed up as fairness",
            ]),
            struggles: s(&[
                "Withdraws instead of naming what hurts",
                "Lets work crowd out the relationship",
                "Struggles when a partner will not commit to roles",
            ]),
        },
        PersonaMetadata {
            code: code("BDEH"),
            name: "The Maverick".into(),
            traits: "Unfussy, serene, driven and independent".into(),
            dating_behavior: s(&[
                "Keeps first dates casual and low-key",
                "Lets interest build quietly before committing",
                "Fits dates around a demanding schedule",
                "Happy to plan, pay and propose the next step",
            ]),
            in_relationships: s(&[
                "Brings an easy, unpretentious comfort",
                "Creates calm when the week gets chaotic",
                "Expects a partner who backs her goals",
                "Needs room for her own friends and plans",
            ]),
            most_attractive: s(&[
                "Quiet maturity and a settled sense of self",
                "Easy charisma in a room full of strangers",
                "An appetite for adventure and spontaneous plans",
                "A true partnership where decisions are shared",
            ]),
            least_attractive: s(&[
                "Silence that never breaks",
                "Rigid ideas about who does what",
            ]),
            struggles: s(&[
                "Withdraws instead of naming what hurts",
                "Lets work crowd out the relationship",
                "Can read care as control",
            ]),
        },
        PersonaMetadata {
            code: code("BDFG"),
            name: "The Nurturer".into(),
            traits: "Unfussy, serene, nurturing and traditional".into(),
            dating_behavior: s(&[
                "Keeps first dates casual and low-key",
                "Lets interest build quietly before committing",
                "Invites dates into her home early",
                "Expects him to plan and lead",
            ]),
            in_relationships: s(&[
                "Brings an easy, unpretentious comfort",
                "Creates calm when the week gets chaotic",
                "Turns a shared space into a home",
                "Values clear roles and family rituals",
            ]),
            most_attractive: s(&[
                "Quiet maturity and a settled sense of self",
                "Easy charisma in a room full of strangers",
                "Stability in work, habits and affection",
                "Respect for tradition and family roles",
            ]),
            least_attractive: s(&[
                "Silence that never breaks",
                "Indecision dressed up as fairness",
            ]),
            struggles: s(&[
                "Withdraws instead of naming what hurts",
                "Over-gives and then resents it",
                "Struggles when a partner will not commit to roles",
            ]),
        },
        PersonaMetadata {
            code: code("BDFH"),
            name: "The Kindred Spirit".into(),
            traits: "Unfussy, serene, nurturing and independent".into(),
            dating_behavior: s(&[
                "Keeps first dates casual and low-key",
                "Lets interest build quietly before committing",
                "Invites dates into her home early",
                "Happy to plan, pay and propose the next step",
            ]),
            in_relationships: s(&[
                "Brings an easy, unpretentious comfort",
                "Creates calm when the week gets chaotic",
                "Turns a shared space into a home",
                "Needs room for her own friends and plans",
            ]),
            most_attractive: s(&[
                "Quiet maturity and a settled sense of self",
                "Easy charisma in a room full of strangers",
                "Stability in work, habits and affection",
                "A true partnership where decisions are shared",
            ]),
            least_attractive: s(&[
                "Silence that never breaks",
                "Rigid ideas about who does what",
            ]),
            struggles: s(&[
                "Withdraws instead of naming what hurts",
                "Over-gives and then resents it",
                "Can read care as control",
            ]),
        },
    ]
}

const MEN_TIERS: [(&str, [&[&str]; 6]); 16] = [
    ("ACEG", [&["ADEG", "ACEG"], &["ADFG", "BDEG", "ACFG"], &["BCEG", "BDFG", "ADEH"], &["BCFG", "ACEH", "ADFH"], &["BDEH", "ACFH", "BCEH"], &["BDFH", "BCFH"]]),
    ("ACEH", [&["ADEH", "ACEH"], &["ADFH", "BDEH", "ACFH"], &["ADEG", "BCEH", "BDFH"], &["ACEG", "ADFG", "BCFH"], &["BDEG", "ACFG", "BCEG"], &["BDFG", "BCFG"]]),
    ("ACFG", [&["ADFG", "ACFG"], &["BDFG", "ADEG", "BCFG"], &["ACEG", "ADFH", "BDEG"], &["ACFH", "BCEG", "BDFH"], &["ADEH", "BCFH", "ACEH"], &["BDEH", "BCEH"]]),
    ("ACFH", [&["ADFH", "ACFH"], &["BDFH", "ADEH", "ADFG"], &["BCFH", "ACEH", "ACFG"], &["BDEH", "BDFG", "ADEG"], &["BCEH", "BCFG", "ACEG"], &["BDEG", "BCEG"]]),
    ("ADEG", [&["ACEG", "ACFG"], &["BCEG", "ADEG", "BCFG"], &["ACEH", "ADFG", "BDEG"], &["ACFH", "BCEH", "BDFG"], &["ADEH", "BCFH", "ADFH"], &["BDEH", "BDFH"]]),
    ("ADEH", [&["ACEH", "ACFH"], &["BCEH", "ACEG", "ADEH"], &["BCFH", "ACFG", "ADFH"], &["BCEG", "BDEH", "ADEG"], &["BCFG", "BDFH", "ADFG"], &["BDEG", "BDFG"]]),
    ("ADFG", [&["ACFG", "BCFG"], &["ACEG", "ADFG", "ACFH"], &["BCEG", "BDFG", "ADEG"], &["BCFH", "ACEH", "ADFH"], &["BDEG", "BCEH", "BDFH"], &["ADEH", "BDEH"]]),
    ("ADFH", [&["ACFH", "BCFH"], &["ACEH", "ACFG", "ADFH"], &["BCEH", "BCFG", "BDFH"], &["ACEG", "ADEH", "ADFG"], &["BCEG", "BDEH", "BDFG"], &["ADEG", "BDEG"]]),
    ("BCEG", [&["BDEG", "ADEG"], &["BCEG", "BDFG", "ACEG"], &["ADFG", "BCFG", "ACFG"], &["BDEH", "ADEH", "BCEH"], &["BDFH", "ACEH", "ADFH"], &["BCFH", "ACFH"]]),
    ("BCEH", [&["BDEH", "ADEH"], &["BCEH", "BDFH", "ACEH"], &["ADFH", "BCFH", "BDEG"], &["ACFH", "ADEG", "BCEG"], &["BDFG", "ACEG", "ADFG"], &["BCFG", "ACFG"]]),
    ("BCFG", [&["BDFG", "ADFG"], &["BCFG", "ACFG", "BDEG"], &["ADEG", "BCEG", "BDFH"], &["ACEG", "ADFH", "BCFH"], &["ACFH", "BDEH", "ADEH"], &["BCEH", "ACEH"]]),
    ("BCFH", [&["BDFH", "ADFH"], &["BCFH", "ACFH", "BDEH"], &["BDFG", "ADEH", "ADFG"], &["BCEH", "BCFG", "ACEH"], &["ACFG", "BDEG", "ADEG"], &["BCEG", "ACEG"]]),
    ("BDEG", [&["BCEG", "ACEG"], &["BCFG", "ACFG", "BDEG"], &["ADEG", "BCEH", "BDFG"], &["ACEH", "ADFG", "BCFH"], &["ACFH", "BDEH", "ADEH"], &["BDFH", "ADFH"]]),
    ("BDEH", [&["BCEH", "ACEH"], &["BCFH", "ACFH", "BCEG"], &["BDEH", "ACEG", "ADEH"], &["BCFG", "BDFH", "ACFG"], &["ADFH", "BDEG", "ADEG"], &["BDFG", "ADFG"]]),
    ("BDFG", [&["BCFG", "ACFG"], &["BCEG", "BDFG", "ACEG"], &["ADFG", "BCFH", "ACFH"], &["BDEG", "ADEG", "BCEH"], &["BDFH", "ACEH", "ADFH"], &["BDEH", "ADEH"]]),
    ("BDFH", [&["BCFH", "ACFH"], &["BCEH", "BCFG", "BDFH"], &["ACEH", "ACFG", "ADFH"], &["BCEG", "BDEH", "BDFG"], &["ACEG", "ADEH", "ADFG"], &["BDEG", "ADEG"]]),
];

const WOMEN_TIERS: [(&str, [&[&str]; 6]); 16] = [
    ("ACEG", [&["ADEG", "ACEG"], &["BDEG", "ADEH", "ADFG"], &["BCEG", "ACEH", "ACFG"], &["BDEH", "BDFG", "ADFH"], &["BCEH", "BCFG", "ACFH"], &["BDFH", "BCFH"]]),
    ("ACEH", [&["ADEH", "ACEH"], &["BDEH", "ADFH", "BCEH"], &["ACFH", "ADEG", "BDFH"], &["ACEG", "BCFH", "BDEG"], &["ADFG", "BCEG", "ACFG"], &["BDFG", "BCFG"]]),
    ("ACFG", [&["ADFG", "ACFG"], &["ADEG", "BDFG", "ACEG"], &["ADFH", "BCFG", "BDEG"], &["ACFH", "ADEH", "BCEG"], &["BDFH", "ACEH", "BCFH"], &["BDEH", "BCEH"]]),
    ("ACFH", [&["ADFH", "ACFH"], &["ADEH", "BDFH", "ACEH"], &["BCFH", "BDEH", "ADFG"], &["BCEH", "ACFG", "ADEG"], &["BDFG", "ACEG", "BCFG"], &["BDEG", "BCEG"]]),
    ("ADEG", [&["ACEG", "BCEG"], &["ACEH", "ACFG", "ADEG"], &["BCEH", "BCFG", "BDEG"], &["ACFH", "ADEH", "ADFG"], &["BCFH", "BDEH", "BDFG"], &["ADFH", "BDFH"]]),
    ("ADEH", [&["ACEH", "BCEH"], &["ACFH", "ADEH", "ACEG"], &["BCFH", "BDEH", "ADFH"], &["BCEG", "ACFG", "ADEG"], &["BDFH", "BCFG", "BDEG"], &["ADFG", "BDFG"]]),
    ("ADFG", [&["ACFG", "ACEG"], &["BCFG", "ACFH", "ADFG"], &["BCEG", "ACEH", "ADEG"], &["BCFH", "BDFG", "ADFH"], &["BCEH", "BDEG", "ADEH"], &["BDFH", "BDEH"]]),
    ("ADFH", [&["ACFH", "ACEH"], &["BCFH", "ADFH", "BCEH"], &["ACFG", "ADEH", "BDFH"], &["ACEG", "BCFG", "BDEH"], &["ADFG", "BCEG", "ADEG"], &["BDFG", "BDEG"]]),
    ("BCEG", [&["BDEG", "ADEG"], &["BCEG", "ACEG", "BDEH"], &["BDFG", "ADEH", "ADFG"], &["BCEH", "BCFG", "ACEH"], &["ACFG", "BDFH", "ADFH"], &["BCFH", "ACFH"]]),
    ("BCEH", [&["BDEH", "ADEH"], &["BCEH", "ACEH", "BDFH"], &["ADFH", "BCFH", "BDEG"], &["ACFH", "ADEG", "BCEG"], &["ACEG", "BDFG", "ADFG"], &["BCFG", "ACFG"]]),
    ("BCFG", [&["BDFG", "ADFG"], &["BCFG", "BDEG", "ACFG"], &["ADEG", "BCEG", "BDFH"], &["ACEG", "ADFH", "BCFH"], &["BDEH", "ACFH", "ADEH"], &["BCEH", "ACEH"]]),
    ("BCFH", [&["BDFH", "ADFH"], &["BCFH", "BDEH", "ACFH"], &["ADEH", "BCEH", "ACEH"], &["BDFG", "ADFG", "BCFG"], &["BDEG", "ACFG", "ADEG"], &["BCEG", "ACEG"]]),
    ("BDEG", [&["BCEG", "ACEG"], &["BCEH", "BCFG", "BDEG"], &["ACEH", "ACFG", "ADEG"], &["BCFH", "BDEH", "BDFG"], &["ACFH", "ADEH", "ADFG"], &["BDFH", "ADFH"]]),
    ("BDEH", [&["BCEH", "ACEH"], &["BCFH", "BDEH", "ACFH"], &["ADEH", "BCEG", "ACEG"], &["BDFH", "ADFH", "BCFG"], &["BDEG", "ACFG", "ADEG"], &["BDFG", "ADFG"]]),
    ("BDFG", [&["BCFG", "ACFG"], &["BCEG", "ACEG", "BCFH"], &["BDFG", "ACFH", "ADFG"], &["BCEH", "BDEG", "ACEH"], &["ADEG", "BDFH", "ADFH"], &["BDEH", "ADEH"]]),
    ("BDFH", [&["BCFH", "ACFH"], &["BCEH", "ACEH", "BDFH"], &["ADFH", "BCFG", "BDEH"], &["ACFG", "ADEH", "BCEG"], &["ACEG", "BDFG", "ADFG"], &["BDEG", "ADEG"]]),
];

fn men_typical() -> Vec<TypicalProfile> {
    use CapacityLevel::*;
    use ConflictApproach::*;
    use Driver::*;
    use RepairMode::*;
    use RepairSpeed::*;
    vec![
        typical("ACEG", 60.0, 60.0, Pursue, Quick, Practical, Low, Disrespect),
        typical("ACEH", 55.0, 65.0, Pursue, Quick, Verbal, Low, Control),
        typical("ACFG", 75.0, 70.0, Pursue, Gradual, Practical, Medium, Disrespect),
        typical("ACFH", 70.0, 75.0, Pursue, Gradual, Verbal, Medium, Control),
        typical("ADEG", 45.0, 65.0, Withdraw, Quick, Practical, Medium, Disrespect),
        typical("ADEH", 40.0, 70.0, Withdraw, Quick, Verbal, Medium, Control),
        typical("ADFG", 60.0, 75.0, Withdraw, Gradual, Practical, High, Disrespect),
        typical("ADFH", 55.0, 80.0, Withdraw, Gradual, Verbal, High, Control),
        typical("BCEG", 65.0, 55.0, Pursue, Quick, Practical, Medium, Abandonment),
        typical("BCEH", 60.0, 60.0, Pursue, Quick, Verbal, Medium, Inadequacy),
        typical("BCFG", 80.0, 65.0, Pursue, Gradual, Practical, High, Abandonment),
        typical("BCFH", 75.0, 70.0, Pursue, Gradual, Verbal, High, Inadequacy),
        typical("BDEG", 50.0, 60.0, Withdraw, Quick, Practical, High, Abandonment),
        typical("BDEH", 45.0, 65.0, Withdraw, Quick, Verbal, High, Inadequacy),
        typical("BDFG", 65.0, 70.0, Withdraw, Gradual, Practical, High, Abandonment),
        typical("BDFH", 60.0, 75.0, Withdraw, Gradual, Verbal, High, Inadequacy),
    ]
}

fn women_typical() -> Vec<TypicalProfile> {
    use CapacityLevel::*;
    use ConflictApproach::*;
    use Driver::*;
    use RepairMode::*;
    use RepairSpeed::*;
    vec![
        typical("ACEG", 65.0, 55.0, Pursue, Quick, Practical, Low, Disrespect),
        typical("ACEH", 55.0, 50.0, Pursue, Quick, Verbal, Low, Control),
        typical("ACFG", 80.0, 70.0, Pursue, Gradual, Practical, Medium, Disrespect),
        typical("ACFH", 70.0, 65.0, Pursue, Gradual, Verbal, Medium, Control),
        typical("ADEG", 55.0, 60.0, Withdraw, Quick, Practical, Medium, Disrespect),
        typical("ADEH", 45.0, 55.0, Withdraw, Quick, Verbal, Medium, Control),
        typical("ADFG", 70.0, 75.0, Withdraw, Gradual, Practical, High, Disrespect),
        typical("ADFH", 60.0, 70.0, Withdraw, Gradual, Verbal, High, Control),
        typical("BCEG", 60.0, 65.0, Pursue, Quick, Practical, Medium, Abandonment),
        typical("BCEH", 50.0, 60.0, Pursue, Quick, Verbal, Medium, Inadequacy),
        typical("BCFG", 75.0, 80.0, Pursue, Gradual, Practical, High, Abandonment),
        typical("BCFH", 65.0, 75.0, Pursue, Gradual, Verbal, High, Inadequacy),
        typical("BDEG", 50.0, 70.0, Withdraw, Quick, Practical, High, Abandonment),
        typical("BDEH", 40.0, 65.0, Withdraw, Quick, Verbal, High, Inadequacy),
        typical("BDFG", 65.0, 85.0, Withdraw, Gradual, Practical, High, Abandonment),
        typical("BDFH", 55.0, 80.0, Withdraw, Gradual, Verbal, High, Inadequacy),
    ]
}

#[allow(clippy::too_many_arguments)]
fn typical(
    raw: &str,
    want: f64,
    offer: f64,
    approach: ConflictApproach,
    repair_speed: RepairSpeed,
    repair_mode: RepairMode,
    capacity: CapacityLevel,
    driver: Driver,
) -> TypicalProfile {
    TypicalProfile { code: code(raw), want, offer, approach, repair_speed, repair_mode, capacity, driver }
}

fn tier_row(source: &str, buckets: &[&[&str]; 6]) -> TierRow {
    TierRow {
        source: code(source),
        buckets: Tier::ALL
            .iter()
            .zip(buckets.iter())
            .map(|(tier, codes)| (*tier, codes.iter().map(|c| code(c)).collect()))
            .collect(),
    }
}

pub(crate) fn builtin_catalog() -> PersonaCatalog {
    let mut catalog = PersonaCatalog::empty();
    let tables = [
        (Gender::Male, men_personas(), &MEN_TIERS, men_typical()),
        (Gender::Female, women_personas(), &WOMEN_TIERS, women_typical()),
    ];
    for (gender, personas, tiers, typical) in tables {
        for metadata in personas {
            catalog.insert_metadata(gender, metadata);
        }
        for (source, buckets) in tiers.iter() {
            catalog.insert_tier_row(gender, tier_row(source, buckets));
        }
        for profile in typical {
            catalog.insert_typical(gender, profile);
        }
    }
    catalog
}
