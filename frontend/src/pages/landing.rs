use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::carousel::Carousel;
use crate::components::counter::Counter;
use crate::components::lead_form::LeadForm;
use crate::components::modal::{use_modal_controller, Modal, ModalAction};
use crate::components::reveal::{FadeIn, Milestone, Roadmap};
use crate::components::scope_chart::ScopeChart;
use crate::components::section_nav::{scroll_to_id, use_active_section, SectionNav};
use crate::components::toast::{use_toast, Toast};

const DEMO_MODAL: &str = "demo-modal";
const METHODOLOGY_MODAL: &str = "methodology-modal";
const DIALOGS: &[&str] = &[DEMO_MODAL, METHODOLOGY_MODAL];

fn faq_items() -> Vec<AccordionItem> {
    vec![
        AccordionItem {
            question: "What are Scope 1, 2 and 3 emissions?",
            answer: "Scope 1 covers emissions from sources a hospital owns, such as boilers and fleet vehicles. Scope 2 covers purchased electricity, steam and cooling. Scope 3 covers everything in the value chain, from pharmaceuticals and medical devices to food and waste.",
        },
        AccordionItem {
            question: "How long does an assessment take?",
            answer: "A baseline assessment typically takes four to six weeks, depending on how much utility and procurement data is already available.",
        },
        AccordionItem {
            question: "Which reporting frameworks do you support?",
            answer: "SustainZone maps your inventory to the GHG Protocol and produces disclosures aligned with the reporting requirements your organization falls under.",
        },
        AccordionItem {
            question: "Do we need new hardware or sensors?",
            answer: "No. We start from the data you already have: utility bills, building management exports and procurement records.",
        },
    ]
}

fn milestones() -> Vec<Milestone> {
    vec![
        Milestone {
            period: "Months 0-2",
            title: "Baseline",
            body: "Measure Scope 1, 2 and 3 emissions across every site.",
            dot_delay_ms: 0,
            card_delay_ms: 150,
        },
        Milestone {
            period: "Months 3-6",
            title: "Quick wins",
            body: "Retune HVAC schedules, switch anaesthetic gases, cut energy waste.",
            dot_delay_ms: 300,
            card_delay_ms: 450,
        },
        Milestone {
            period: "Months 6-18",
            title: "Supply chain",
            body: "Engage top suppliers and set procurement criteria.",
            dot_delay_ms: 600,
            card_delay_ms: 750,
        },
        Milestone {
            period: "Year 2+",
            title: "Net zero pathway",
            body: "Track progress against science-based targets.",
            dot_delay_ms: 900,
            card_delay_ms: 1050,
        },
    ]
}

fn comparison_cards() -> Vec<Html> {
    let cards = [
        ("Spreadsheets", "Manual data entry, no audit trail, updated once a year."),
        ("Generic carbon tools", "Built for offices, blind to clinical supply chains."),
        ("Consultancies", "One-off reports that go stale the day they are delivered."),
        ("SustainZone", "Continuous, healthcare-specific inventory with guided reduction plans."),
        ("In-house team", "Deep context, but stretched thin across reporting deadlines."),
    ];
    cards
        .iter()
        .map(|(title, body)| html! {
            <div class="comparison-card">
                <h4>{*title}</h4>
                <p>{*body}</p>
            </div>
        })
        .collect()
}

fn compliance_cards() -> Vec<Html> {
    let cards = [
        ("GHG Protocol", "Corporate standard inventories across all three scopes."),
        ("CSRD", "European sustainability reporting for large organizations."),
        ("SEC climate disclosure", "Emissions and climate risk disclosure for US filers."),
        ("NHS Net Zero", "Supplier roadmap requirements for the NHS."),
        ("Joint Commission", "Sustainable healthcare certification standards."),
        ("ISO 14064", "Verification of greenhouse gas statements."),
    ];
    cards
        .iter()
        .map(|(title, body)| html! {
            <div class="compliance-card">
                <h4>{*title}</h4>
                <p>{*body}</p>
            </div>
        })
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let active = use_active_section();
    let toast = use_toast();
    let modals = use_modal_controller(DIALOGS);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let modal_action = {
        let dispatcher = modals.dispatcher();
        Callback::from(move |action: ModalAction| dispatcher.dispatch(action))
    };
    let open_modal = |id: &'static str| {
        modal_action.reform(move |e: MouseEvent| {
            e.prevent_default();
            ModalAction::Open(id.to_string())
        })
    };
    let scroll_to = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_id(id);
        })
    };

    html! {
        <div class="landing-page">
            <SectionNav {active} />

            <header class="hero">
                <div class="hero-content">
                    <h1>{"Decarbonize healthcare without slowing down care"}</h1>
                    <p class="hero-subtitle">
                        {"SustainZone measures your hospital's carbon footprint across all three scopes and turns it into a practical reduction plan."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta" onclick={scroll_to("contact")}>{"Get Your Free Assessment"}</a>
                        <a href={format!("#{}", DEMO_MODAL)} class="hero-secondary" onclick={open_modal(DEMO_MODAL)}>{"Watch the demo"}</a>
                    </div>
                </div>
            </header>

            <section id="footprint" class="landing-section">
                <FadeIn>
                    <h2>{"Healthcare's Footprint"}</h2>
                    <p>{"If the global health sector were a country, it would be the fifth-largest emitter on the planet."}</p>
                </FadeIn>
                <div class="stat-grid">
                    <div class="stat">
                        <Counter target={4.4} decimals={1} suffix="%" />
                        <p>{"of global net emissions come from healthcare"}</p>
                    </div>
                    <div class="stat">
                        <Counter target={2000.0} suffix=" Mt" />
                        <p>{"CO2-equivalent emitted by the sector each year"}</p>
                    </div>
                    <div class="stat">
                        <Counter target={1234.0} />
                        <p>{"facilities already measuring with SustainZone"}</p>
                    </div>
                </div>
            </section>

            <section id="emissions" class="landing-section">
                <FadeIn>
                    <h2>{"Carbon Emissions"}</h2>
                    <p>{"Most of a hospital's footprint sits outside its walls, in the supply chain."}</p>
                </FadeIn>
                <ScopeChart />
                <a href={format!("#{}", METHODOLOGY_MODAL)} class="text-link" onclick={open_modal(METHODOLOGY_MODAL)}>
                    {"How we calculate this"}
                </a>
            </section>

            <section id="regulatory" class="landing-section">
                <FadeIn>
                    <h2>{"Regulatory Landscape"}</h2>
                    <p>{"Disclosure requirements are tightening. These are the frameworks our reports cover."}</p>
                </FadeIn>
                <Carousel name="compliance" label="Compliance frameworks">
                    { for compliance_cards() }
                </Carousel>
            </section>

            <section id="operations" class="landing-section">
                <FadeIn>
                    <h2>{"Greening Operations"}</h2>
                    <p>{"A phased roadmap from first measurement to a credible net zero pathway."}</p>
                </FadeIn>
                <Roadmap milestones={milestones()} />
            </section>

            <section id="solution" class="landing-section">
                <FadeIn>
                    <h2>{"SustainZone Solution"}</h2>
                    <p>{"How SustainZone compares to the usual ways of tracking emissions."}</p>
                </FadeIn>
                <Carousel name="comparison" label="Comparison with alternatives">
                    { for comparison_cards() }
                </Carousel>
            </section>

            <section id="casestudy" class="landing-section">
                <FadeIn>
                    <h2>{"Case Study"}</h2>
                    <p>{"A 600-bed regional hospital network, eighteen months after onboarding."}</p>
                </FadeIn>
                <div class="stat-grid">
                    <div class="stat">
                        <Counter target={23.0} suffix="%" />
                        <p>{"reduction in Scope 1 and 2 emissions"}</p>
                    </div>
                    <div class="stat">
                        <Counter target={1.8} decimals={1} suffix="M" />
                        <p>{"dollars saved on energy annually"}</p>
                    </div>
                    <div class="stat">
                        <Counter target={12500.0} />
                        <p>{"tonnes CO2e avoided"}</p>
                    </div>
                </div>
            </section>

            <section id="faq" class="landing-section">
                <h2>{"FAQ"}</h2>
                <Accordion items={faq_items()} />
            </section>

            <section id="contact" class="landing-section">
                <FadeIn>
                    <h2>{"Start with a free assessment"}</h2>
                    <p>{"Tell us about your organization and we'll be in touch within 24 hours."}</p>
                </FadeIn>
                <LeadForm on_toast={toast.show.clone()} />
            </section>

            <Modal id={DEMO_MODAL} title="SustainZone in two minutes" open={modals.is_open(DEMO_MODAL)} on_action={modal_action.clone()}>
                <p>{"See how a hospital team goes from utility bills to a full Scope 1-3 inventory in an afternoon."}</p>
            </Modal>
            <Modal id={METHODOLOGY_MODAL} title="Methodology" open={modals.is_open(METHODOLOGY_MODAL)} on_action={modal_action.clone()}>
                <p>{"Shares follow the GHG Protocol split reported for the health sector: direct operations, purchased energy and the supply chain."}</p>
            </Modal>

            <Toast state={toast.state.clone()} />
            <style>
                {r#"
                    .landing-page {
                        color: #0f172a;
                        background: #f8fafc;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .landing-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 5rem 1.5rem;
                    }
                    .toc {
                        position: fixed;
                        top: 6rem;
                        left: 1.5rem;
                        width: 12rem;
                    }
                    .toc-link {
                        display: block;
                        padding: 0.35rem 0.75rem;
                        color: #64748b;
                        border-left: 2px solid transparent;
                        text-decoration: none;
                    }
                    .toc-link.active {
                        color: #059669;
                        border-left-color: #059669;
                        font-weight: 600;
                    }
                    .mobile-toc { display: none; }
                    .mobile-toc-menu { display: none; }
                    .mobile-toc-menu.open { display: block; }
                    #mobile-toc-chevron {
                        display: inline-block;
                        transition: transform 0.2s ease;
                    }
                    @media (max-width: 1279px) {
                        .toc { display: none; }
                        .mobile-toc {
                            display: block;
                            position: sticky;
                            top: 0;
                            z-index: 20;
                            background: #ffffff;
                        }
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: none;
                    }
                    .carousel-viewport { overflow: hidden; }
                    .carousel-track {
                        display: flex;
                        gap: 1.5rem;
                        transition: transform 0.4s ease;
                    }
                    .carousel-card { flex: 0 0 100%; }
                    @media (min-width: 640px) {
                        .carousel-card { flex-basis: calc((100% - 1.5rem) / 2); }
                    }
                    @media (min-width: 1024px) {
                        .carousel-card { flex-basis: calc((100% - 3rem) / 3); }
                    }
                    .carousel-dot {
                        width: 0.6rem;
                        height: 0.6rem;
                        border-radius: 50%;
                        border: none;
                    }
                    .bg-emerald-500 { background: #10b981; }
                    .bg-slate-300 { background: #cbd5e1; }
                    .accordion-content {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }
                    .accordion-content.open { max-height: 40rem; }
                    .donut-segment { transition: stroke-width 0.2s ease; cursor: pointer; }
                    .donut-segment.active { stroke-width: 7; }
                    .scope-legend-item { border: 1px solid transparent; border-radius: 0.5rem; }
                    .scope-card.highlighted { border-color: #059669; }
                    .roadmap-dot, .roadmap-card {
                        opacity: 0;
                        transition: opacity 0.5s ease, transform 0.5s ease;
                    }
                    .roadmap-card { transform: translateX(-12px); }
                    .roadmap-dot.animate, .roadmap-card.animate {
                        opacity: 1;
                        transform: none;
                    }
                    .modal {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .modal.hidden { display: none; }
                    .modal-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(15, 23, 42, 0.6);
                    }
                    .modal-panel {
                        position: relative;
                        max-width: 32rem;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: #ffffff;
                    }
                    .toast {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        z-index: 60;
                        padding: 1rem 1.25rem;
                        border-left: 4px solid transparent;
                        border-radius: 0.75rem;
                        background: #ffffff;
                        box-shadow: 0 10px 30px rgba(15, 23, 42, 0.15);
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .translate-x-0 { transform: translateX(0); }
                    .translate-x-\[120\%\] { transform: translateX(120%); }
                    .opacity-0 { opacity: 0; }
                    .opacity-100 { opacity: 1; }
                "#}
            </style>
        </div>
    }
}
