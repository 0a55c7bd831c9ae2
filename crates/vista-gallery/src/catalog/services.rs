//! Services
//!
//! Fifteen services in fixed order, each with a banner, an icon and an
//! optional bullet-list description.

use serde::Serialize;

/// Text shown for a service without a description
pub const DESCRIPTION_FALLBACK: &str = "Description will be updated soon.";

/// One service entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    /// 1-based position shown in the title
    pub index: u32,
    /// Service name
    pub title: &'static str,
    /// Banner image path (unencoded)
    pub banner: &'static str,
    /// Icon image path (unencoded)
    pub icon: &'static str,
    /// Bullet points, if written
    pub description: Option<&'static [&'static str]>,
}

/// Description as shown in the service modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDescription {
    /// Bullet list
    Bullets(&'static [&'static str]),
    /// Placeholder text
    Fallback(&'static str),
}

impl Service {
    /// Modal title, `"{index}. {title}"`
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}. {}", self.index, self.title)
    }

    /// Description or the fallback text
    #[must_use]
    pub fn description(&self) -> ServiceDescription {
        self.description
            .map_or(ServiceDescription::Fallback(DESCRIPTION_FALLBACK), ServiceDescription::Bullets)
    }
}

/// Every service, in page order
pub static SERVICES: [Service; 15] = [
    Service {
        index: 1,
        title: "Master Planning",
        banner: "Services/Banner/1 Master Planning.jpg",
        icon: "Services/icons/Master Planning.png",
        description: Some(&[
            "Comprehensive land-use analysis and zoning compliance.",
            "Integration of urban design, infrastructure, and environmental considerations.",
            "Strategic site planning for industrial, commercial, and institutional developments.",
            "Space optimization for maximum efficiency and sustainability.",
            "Phased development strategies for long-term growth.",
            "Incorporation of circulation networks (roads, pedestrian, utilities).",
            "Climate-responsive and sustainable planning approaches.",
            "Stakeholder consultation and vision alignment.",
            "Future-proof design accommodating expansion and adaptability.",
        ]),
    },
    Service {
        index: 2,
        title: "Architecture",
        banner: "Services/Banner/2 Architecture.jpg",
        icon: "Services/icons/Architecture.png",
        description: Some(&[
            "Concept-to-completion architectural design services.",
            "Innovative, functional, and aesthetic design solutions.",
            "Sustainable and green building practices (IGBC/GBC compliance).",
            "Space planning tailored to user needs and operations.",
            "Industrial, commercial, residential, and institutional design expertise.",
            "Advanced 3D visualization, BIM, and walkthroughs.",
            "Regulatory approvals and statutory compliances.",
            "Integration of modern materials and technologies.",
            "Human-centric and ergonomically designed environments.",
        ]),
    },
    Service {
        index: 3,
        title: "Structural Engineering",
        banner: "Services/Banner/3 Stuctural Engineering.jpg",
        icon: "Services/icons/Structural Engineering.png",
        description: Some(&[
            "Safe, economical, and optimized structural designs.",
            "Expertise in steel, RCC, composite, and precast structures.",
            "Design of complex industrial facilities and heavy foundations.",
            "Advanced seismic and wind-resistant structural systems.",
            "Finite Element Analysis (FEA) and structural modeling.",
            "Retaining structures, deep foundations, and piling design.",
            "Value engineering for material and cost optimization.",
            "Rehabilitation and retrofitting of existing structures.",
            "Compliance with international and Indian codes (IS, ACI, Eurocode).",
        ]),
    },
    Service {
        index: 4,
        title: "MEP",
        banner: "Services/Banner/4 MEP.jpg",
        icon: "Services/icons/MEP.png",
        description: Some(&[
            "End-to-end design and coordination of MEP systems.",
            "Energy-efficient mechanical systems tailored to industry needs.",
            "Power distribution, lighting, and electrical safety systems.",
            "Advanced plumbing & drainage systems for water conservation.",
            "Fire detection and suppression systems as per NFPA/IS codes.",
            "Low-voltage & communication systems integration.",
            "BIM-based MEP clash detection and coordination.",
            "Sustainable and smart building services design.",
            "Operation-friendly systems ensuring minimal downtime.",
        ]),
    },
    Service {
        index: 5,
        title: "HVAC",
        banner: "Services/Banner/5 HVAC.jpg",
        icon: "Services/icons/HVAC.png",
        description: Some(&[
            "Industrial-grade HVAC system design and engineering.",
            "Thermal comfort solutions for commercial & industrial facilities.",
            "Cleanroom & controlled environment HVAC expertise.",
            "Energy-efficient chiller, VRV, and packaged solutions.",
            "Computational Fluid Dynamics (CFD) based airflow design.",
            "Heat load calculation and optimized ducting design.",
            "HVAC retrofitting and system performance upgrades.",
            "Indoor Air Quality (IAQ) and ventilation strategies.",
            "Smart HVAC controls with IoT integration.",
        ]),
    },
    Service {
        index: 6,
        title: "Procurement and Construction",
        banner: "Services/Banner/6 Procurement and Construction.jpg",
        icon: "Services/icons/PROCUREMENT & CONSTRUCTION.png",
        description: Some(&[
            "End-to-end project management and execution.",
            "Transparent vendor evaluation and procurement process.",
            "Cost estimation, budgeting, and value engineering.",
            "Quality assurance and quality control (QA/QC) protocols.",
            "On-site supervision and contractor coordination.",
            "Time-bound project delivery with milestone tracking.",
            "Safety compliance and EHS implementation.",
            "Supply chain management and logistics planning.",
            "Turnkey construction services for industrial and commercial facilities.",
        ]),
    },
    Service {
        index: 7,
        title: "Critical Industrial Infrastructure",
        banner: "Services/Banner/7 Critical Industrial Infrastructure.jpg",
        icon: "Services/icons/Ctitical Industries .png",
        description: Some(&[
            "Design and execution of mission-critical industrial facilities.",
            "Blast-resistant and fire-safe structures for high-risk industries.",
            "Specialized foundations for heavy machinery and dynamic loads.",
            "Utility networks for water, power, gas, and process pipelines.",
            "Hazardous area planning and compliance with global safety norms.",
            "High-performance structures for chemical, petrochemical & pharma plants.",
            "Customized solutions for manufacturing & process industries.",
            "Integration of automation and smart infrastructure technologies.",
            "End-to-end risk management and disaster resilience planning.",
        ]),
    },
    Service {
        index: 8,
        title: "Structural Health Audits & Non-Destructive Testing (NDT)",
        banner: "Services/Banner/8 Structural Health Audits & Non-Destructive Testing (NDT).jpg",
        icon: "Services/icons/Non-Destructive Testing .png",
        description: Some(&[
            "Comprehensive evaluation of structures without causing damage.",
            "Ultrasonic, radiographic, and magnetic particle inspection.",
            "Concrete strength, rebar detection, and crack assessment.",
            "Weld testing and thickness measurements for industrial structures.",
            "Quality verification of structural integrity and durability.",
            "Early detection of potential defects to prevent failures.",
            "Compliance with IS, ASTM, and international standards.",
            "Condition monitoring for predictive maintenance planning.",
            "Detailed reporting with actionable recommendations.",
        ]),
    },
    Service {
        index: 9,
        title: "Retrofitting and Rehabilitation",
        banner: "Services/Banner/9 Retrofitting and Rehabilitation.jpg",
        icon: "Services/icons/Retrofitting .png",
        description: Some(&[
            "Structural strengthening of aging and distressed buildings.",
            "Seismic retrofitting for earthquake-prone regions.",
            "Advanced repair techniques for concrete and steel structures.",
            "Fiber Reinforced Polymer (FRP) wrapping and jacketing solutions.",
            "Restoration of heritage and special-purpose structures.",
            "Corrosion control and protective coating applications.",
            "Life-cycle extension of critical infrastructure assets.",
            "Customized rehabilitation strategies for industrial facilities.",
            "Cost-effective and sustainable repair methodologies.",
        ]),
    },
    Service {
        index: 10,
        title: "Project Management",
        banner: "Services/Banner/10 Project Management.jpg",
        icon: "Services/icons/Project Management .png",
        description: Some(&[
            "End-to-end project planning and execution oversight.",
            "Scope definition, scheduling, and resource allocation.",
            "Independent cost estimation and financial monitoring.",
            "Contractor/vendor prequalification and tender management.",
            "Quality assurance and risk mitigation strategies.",
            "Progress monitoring with milestone tracking.",
            "Stakeholder coordination and reporting systems.",
            "Compliance with statutory, safety, and regulatory norms.",
            "Ensuring on-time and within-budget project delivery.",
        ]),
    },
    Service {
        index: 11,
        title: "Landscaping",
        banner: "Services/Banner/11 Landscaping.jpg",
        icon: "Services/icons/Landscaping .png",
        description: Some(&[
            "Sustainable and climate-responsive landscape design.",
            "Integration of softscape (plants, trees, lawns) and hardscape elements.",
            "Outdoor spaces enhancing user experience and aesthetics.",
            "Stormwater management and green infrastructure solutions.",
            "Xeriscaping and low-maintenance plantation strategies.",
            "Landscape lighting and irrigation system design.",
            "Corporate, industrial, and residential landscape expertise.",
            "Eco-friendly materials and native plantation practices.",
            "Enhancing environmental performance and well-being.",
        ]),
    },
    Service {
        index: 12,
        title: "Interiors",
        banner: "Services/Banner/12 Interiors.jpg",
        icon: "Services/icons/Interior.png",
        description: Some(&[
            "Functional and aesthetic interior space planning.",
            "Tailored solutions for corporate, industrial, and residential spaces.",
            "Ergonomic and user-centric workplace designs.",
            "Integration of natural lighting and ventilation strategies.",
            "Selection of sustainable materials and finishes.",
            "Modular furniture and customized design elements.",
            "3D visualization, walkthroughs, and BIM-based interiors.",
            "Acoustic design for comfort and efficiency.",
            "Branding through spatial design and theme integration.",
        ]),
    },
    Service {
        index: 13,
        title: "Water Management Systems",
        banner: "Services/Banner/13 Water Management Systems.jpg",
        icon: "Services/icons/watermanagement and Retaining .png",
        description: Some(&[
            "End-to-end design of water storage, drainage, and treatment systems.",
            "Rainwater harvesting, groundwater recharge, and stormwater management.",
            "Industrial wastewater treatment and recycling solutions.",
            "Hydraulic and hydrological analysis for flood control.",
            "Design of gravity & reinforced earth retaining walls.",
            "Advanced geotechnical solutions including secant piles, diaphragm walls, and soil nailing.",
            "Erosion control and slope stabilization systems.",
            "Compliance with environmental norms and sustainability standards.",
            "Long-term water balance planning for industrial estates.",
        ]),
    },
    Service {
        index: 14,
        title: "Industrial and Commercial Leasing",
        banner: "Services/Banner/14 Industrial and Commercial Leasing.jpg",
        icon: "Services/icons/Industrial & Commercial.png",
        description: Some(&[
            "Advisory services for leasing of warehouses, factories, and office spaces.",
            "Market analysis and property benchmarking for clients.",
            "Legal and technical due diligence for leasing contracts.",
            "Flexible leasing models to suit client requirements.",
            "Negotiation support ensuring competitive rentals and terms.",
            "Industrial park and SEZ leasing facilitation.",
            "End-to-end transaction management and client representation.",
            "Strong network with developers, landlords, and agencies.",
            "Post-leasing support and space utilization guidance.",
        ]),
    },
    Service {
        index: 15,
        title: "Built-to-Suit Industrial Leased Properties",
        banner: "Services/Banner/15 Built-to-Suit Industrial Leased Properties.jpg",
        icon: "Services/icons/Builttosuitindstries.png",
        description: Some(&[
            "Customized industrial facility development based on client specifications.",
            "Concept-to-delivery solutions including design, approvals, and construction.",
            "Flexible layouts designed for process optimization and scalability.",
            "Compliance with fire, safety, and industrial codes.",
            "Cost-efficient and energy-efficient building strategies.",
            "Fast-track delivery through EPC and turnkey execution.",
            "Single-window support for land acquisition, approvals, and leasing.",
            "Long-term lease structuring with client-specific agreements.",
            "Hassle-free facility management and maintenance integration.",
        ]),
    },
];
