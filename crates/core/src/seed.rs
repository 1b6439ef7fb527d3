use crate::models::holding::{HoldingRole, HoldingStatus};

/// One entry of the built-in starter portfolio.
///
/// Seed entries are compile-time constants; they become real
/// [`PortfolioHolding`](crate::models::holding::PortfolioHolding) records
/// (with generated ids and timestamps) only when a reset writes them out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedStockEntry {
    /// EGX ticker symbol, uppercase, 2–5 letters, unique across the list
    pub symbol: &'static str,
    pub name_en: &'static str,
    pub name_ar: &'static str,
    /// Starting share count
    pub shares: u32,
    /// Average cost per share in EGP
    pub avg_cost: f64,
    pub sector: &'static str,
    pub role: HoldingRole,
    pub status: HoldingStatus,
}

/// The fixed 12-stock portfolio written by a version reset.
pub const SEED_PORTFOLIO: [SeedStockEntry; 12] = [
    SeedStockEntry {
        symbol: "COMI",
        name_en: "Commercial International Bank",
        name_ar: "البنك التجاري الدولي",
        shares: 10,
        avg_cost: 125.46,
        sector: "Banking",
        role: HoldingRole::Core,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "HRHO",
        name_en: "EFG Holding",
        name_ar: "المجموعة المالية هيرميس",
        shares: 40,
        avg_cost: 28.10,
        sector: "Financial Services",
        role: HoldingRole::Growth,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "TMGH",
        name_en: "Talaat Moustafa Group",
        name_ar: "مجموعة طلعت مصطفى القابضة",
        shares: 25,
        avg_cost: 71.80,
        sector: "Real Estate",
        role: HoldingRole::Growth,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "SWDY",
        name_en: "Elsewedy Electric",
        name_ar: "السويدي اليكتريك",
        shares: 30,
        avg_cost: 93.25,
        sector: "Industrials",
        role: HoldingRole::Core,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "ETEL",
        name_en: "Telecom Egypt",
        name_ar: "المصرية للاتصالات",
        shares: 50,
        avg_cost: 42.15,
        sector: "Telecom",
        role: HoldingRole::Income,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "ABUK",
        name_en: "Abu Qir Fertilizers",
        name_ar: "أبو قير للأسمدة والصناعات الكيماوية",
        shares: 20,
        avg_cost: 64.90,
        sector: "Fertilizers",
        role: HoldingRole::Income,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "MFPC",
        name_en: "Misr Fertilizers Production",
        name_ar: "مصر لإنتاج الأسمدة - موبكو",
        shares: 15,
        avg_cost: 118.30,
        sector: "Fertilizers",
        role: HoldingRole::Income,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "EAST",
        name_en: "Eastern Company",
        name_ar: "الشرقية للدخان",
        shares: 60,
        avg_cost: 24.75,
        sector: "Consumer Staples",
        role: HoldingRole::Core,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "ORAS",
        name_en: "Orascom Construction",
        name_ar: "أوراسكوم كونستراكشون",
        shares: 12,
        avg_cost: 244.60,
        sector: "Construction",
        role: HoldingRole::Growth,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "FWRY",
        name_en: "Fawry for Banking Technology",
        name_ar: "فوري لتكنولوجيا البنوك والمدفوعات",
        shares: 100,
        avg_cost: 6.82,
        sector: "Fintech",
        role: HoldingRole::Speculative,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "AMOC",
        name_en: "Alexandria Mineral Oils",
        name_ar: "الإسكندرية للزيوت المعدنية",
        shares: 80,
        avg_cost: 9.44,
        sector: "Energy",
        role: HoldingRole::Speculative,
        status: HoldingStatus::Hold,
    },
    SeedStockEntry {
        symbol: "EKHO",
        name_en: "Egypt Kuwait Holding",
        name_ar: "القابضة المصرية الكويتية",
        shares: 35,
        avg_cost: 31.20,
        sector: "Diversified",
        role: HoldingRole::Core,
        status: HoldingStatus::Hold,
    },
];
