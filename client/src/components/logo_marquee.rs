//! Scrolling logo strips for clients and quality bodies.

use leptos::prelude::*;

/// Logo strip entry: name and image under `/clients`.
pub type Logo = (&'static str, &'static str);

pub static CLIENTS: [Logo; 20] = [
    ("Shivamogga Smart City", "/clients/shivamogga-smart-city.png"),
    ("Income Tax Department", "/clients/income-tax-department.png"),
    ("Karnataka Power Corporation Ltd", "/clients/karnataka-power-corporation.png"),
    ("Raj Bhavan Karnataka", "/clients/raj-bhavan-karnataka.webp"),
    ("Department of Post India", "/clients/department-of-post-india.png"),
    ("Namma Metro", "/clients/namma-metro.png"),
    ("Indian Academy of Sciences", "/clients/indian-academy-of-sciences.png"),
    ("Defence Department Accounts", "/clients/defence-department-accounts.png"),
    ("Karnataka State Police", "/clients/karnataka-state-police.png"),
    ("Karnataka Exam Authority", "/clients/KEA.jpg"),
    ("Karnataka Revenue Department", "/clients/KRD.jpg"),
    ("Centre of e-Governance", "/clients/Centre of e-Governance.png"),
    ("BESCOM", "/clients/BESCOM.png"),
    ("Nemmadi Kendra", "/clients/Nemmadi Kendra.png"),
    ("SBI", "/clients/SBI.png"),
    ("Dimension Data", "/clients/Dimension Data.svg"),
    ("Schneider Eletric", "/clients/Schneider Eletric.png"),
    ("HP", "/clients/HP.svg"),
    ("Infosys", "/clients/Infosys.webp"),
    ("KIADB", "/clients/KIADB.png"),
];

pub static QUALITY_BODIES: [Logo; 9] = [
    ("Nasscom", "/clients/nasscom.webp"),
    ("Assocham", "/clients/assocham.png"),
    ("ESSCI", "/clients/ESSCI.png"),
    ("NSDC", "/clients/NSDC.png"),
    ("FICCI", "/clients/FICCI.png"),
    ("TSSC", "/clients/TSSC.png"),
    ("BFSI", "/clients/BFSI.png"),
    ("DSCI", "/clients/DSCI.png"),
    ("B&WSSC", "/clients/B&WSCC.png"),
];

/// Endless logo strip; the list is rendered twice so the CSS loop is seamless.
#[component]
pub fn LogoMarquee(title: &'static str, logos: &'static [Logo], #[prop(optional)] reverse: bool) -> impl IntoView {
    view! {
        <section class="section marquee-section">
            <p class="eyebrow">{title}</p>
            <div class="marquee">
                <div class="marquee__track" class:marquee__track--reverse=reverse>
                    {logos
                        .iter()
                        .chain(logos)
                        .map(|(name, src)| {
                            view! {
                                <div class="marquee__item">
                                    <div class="marquee__logo">
                                        <img src=*src alt=*name/>
                                    </div>
                                    <span>{*name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
