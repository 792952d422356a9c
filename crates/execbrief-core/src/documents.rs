//! The fixed sample document set
//!
//! Five synthetic business documents spanning technology, manufacturing,
//! healthcare, finance and legal. Built once at startup and uploaded into the
//! demo collection; never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A document in the demo collection. `path` is the unique key within the
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub path: String,
    pub content: String,
    pub category: String,
}

impl Document {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            content: content.into(),
            category: category.into(),
        }
    }
}

/// Number of documents in the sample set.
pub const SAMPLE_DOCUMENT_COUNT: usize = 5;

/// Build the sample document set.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "Tech Company Strategic Plan",
            "tech/strategic-plan-2024.md",
            r#"# TechCorp Strategic Plan 2024

## Executive Summary
TechCorp is positioned for aggressive growth in AI/ML sectors with 47% YoY revenue increase targeting $250M ARR by Q4 2024.

## Key Strategic Initiatives
- Cloud Infrastructure Modernization ($15M investment)
- AI/ML Product Suite Launch (Q2 2024)
- International Market Expansion (EMEA focus)
- Talent Acquisition (200+ engineers)

## Financial Performance
- Current ARR: $170M (47% growth)
- Gross Margin: 78%
- Customer Acquisition Cost: $1,200
- Customer Lifetime Value: $45,000

## Risk Factors
- Competitive pressure from Microsoft, Google
- Regulatory uncertainty in AI space
- Talent retention challenges (15% attrition rate)

## Success Metrics
- ARR growth rate >40%
- Customer satisfaction >4.5/5
- Market share in AI tools >8%"#,
            "Technology",
        ),
        Document::new(
            "Manufacturing Operations Report",
            "operations/manufacturing-q3-2024.md",
            r#"# Global Manufacturing Operations Q3 2024

## Production Metrics
- Total Units Produced: 2.4M units (+12% QoQ)
- Overall Equipment Effectiveness: 87%
- Quality Defect Rate: 0.3%
- On-time Delivery: 94%

## Cost Analysis
- Cost per Unit: $47.50 (down 8% from Q2)
- Labor Costs: $28M (23% of total costs)
- Material Costs: $89M (73% of total costs)
- Energy Costs: $5M (4% of total costs)

## Supply Chain Status
- Supplier Performance Score: 8.7/10
- Inventory Turnover: 6.2x annually
- Raw Material Availability: 98%
- Critical Path Bottlenecks: Semiconductor chips, rare earth materials

## Operational Challenges
- Skilled labor shortage (12% open positions)
- Rising energy costs (+18% YoY)
- Supply chain disruptions in Asia-Pacific region
- Equipment maintenance backlogs

## Improvement Initiatives
- Automation implementation (Phase 3 of 5)
- Lean manufacturing optimization
- Predictive maintenance AI deployment
- Supplier diversification program"#,
            "Manufacturing",
        ),
        Document::new(
            "Healthcare Division Performance",
            "healthcare/division-performance-q3.md",
            r#"# Healthcare Division Q3 2024 Performance Report

## Patient Care Metrics
- Patient Satisfaction Score: 4.6/5.0
- Average Wait Time: 18 minutes (target: <20 min)
- Readmission Rate: 8.2% (industry average: 10.1%)
- Mortality Rate: 1.8% (best in region)

## Financial Performance
- Revenue: $145M (+6% YoY)
- Operating Margin: 12.4%
- Cost per Patient: $3,847
- Insurance Reimbursement Rate: 94%

## Operational Excellence
- Bed Occupancy Rate: 82%
- Staff-to-Patient Ratio: 1:4 (optimal range)
- Medical Equipment Uptime: 97.3%
- Emergency Response Time: 4.2 minutes average

## Regulatory Compliance
- HIPAA Compliance Score: 98%
- Joint Commission Accreditation: Renewed (5-year term)
- FDA Inspection Results: No major findings
- Quality Assurance Program: Exceeds standards

## Strategic Initiatives
- Telemedicine expansion (35% growth in virtual visits)
- AI-powered diagnostic tools implementation
- Electronic Health Records optimization
- Medical staff retention program (reduced turnover to 8%)

## Key Challenges
- Nursing shortage (15% vacancy rate)
- Rising pharmaceutical costs (+22% YoY)
- Cybersecurity threats (3 attempted breaches)
- Aging infrastructure requiring $25M upgrade"#,
            "Healthcare",
        ),
        Document::new(
            "Financial Services Compliance Report",
            "finance/compliance-assessment-2024.md",
            r#"# Financial Services Compliance Assessment 2024

## Regulatory Compliance Status
- SOX Compliance: 100% (all controls tested)
- Basel III Capital Adequacy: 14.2% (requirement: 8%)
- AML/KYC Program Effectiveness: 96%
- GDPR Data Protection Score: 94%

## Risk Management
- Value at Risk (VaR): $2.3M (95% confidence, 1-day horizon)
- Credit Loss Provisions: $45M (1.2% of loan portfolio)
- Operational Risk Events: 12 (down from 18 last quarter)
- Cyber Risk Assessment: Medium-High

## Financial Performance
- Return on Assets: 1.8%
- Return on Equity: 15.2%
- Net Interest Margin: 3.4%
- Cost-to-Income Ratio: 58%

## Regulatory Updates
- Implementation of new stress testing requirements
- Enhanced reporting for ESG investments
- Updated consumer protection regulations
- Digital asset trading guidelines compliance

## Audit Findings
- Internal Audit: 3 medium-risk findings (remediated)
- External Audit: Unqualified opinion
- Regulatory Examinations: Satisfactory rating
- Third-party risk assessments: 94% compliant"#,
            "Finance",
        ),
        Document::new(
            "Legal Department Analysis",
            "legal/quarterly-analysis-q3.md",
            r#"# Legal Department Quarterly Analysis Q3 2024

## Litigation Overview
- Active Cases: 23 (down from 31 previous quarter)
- New Filings: 7
- Cases Resolved: 15 (92% in company's favor)
- Average Resolution Time: 8.3 months

## Contract Management
- Contracts Reviewed: 1,247
- Average Review Time: 3.2 days (target: <5 days)
- Contract Value Processed: $890M
- Vendor Agreement Renewals: 78 contracts

## Intellectual Property
- Patent Applications Filed: 12
- Trademark Registrations: 8
- IP Licensing Revenue: $3.2M
- Copyright Enforcement Actions: 5

## Regulatory Compliance
- Compliance Training Completion: 96%
- Regulatory Filings: 100% on-time submission
- Policy Updates: 15 corporate policies revised
- Data Privacy Audits: 4 completed, all passed

## Cost Management
- Legal Spend: $2.8M (8% under budget)
- External Counsel Costs: $1.9M
- Internal Legal Team Productivity: +12%
- E-discovery Costs: $340K (managed through technology)

## Key Legal Risks
- Product liability exposure: Medium
- Employment law compliance: Low
- International trade regulations: High
- Data privacy regulations: Medium-High"#,
            "Legal",
        ),
    ]
}
