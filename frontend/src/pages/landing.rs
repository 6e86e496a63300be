use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::faq_accordion::FaqAccordion;
use crate::components::nav_menu::NavMenu;
use crate::components::video_player::VideoPlayer;
use crate::config;
use crate::content::catalog::{self, BENEFITS, GALLERY, INGREDIENTS, TESTIMONIALS};
use crate::content::products::{self, Product, PRODUCTS};
use crate::state::navigation::{self, Section};
use crate::state::theme::{self, Theme};
use crate::utils::dom::{self, BrowserScroller, BrowserThemeHost};

fn section_heading(title: &str, subtitle: &str) -> Html {
    html! {
        <div class="section-heading">
            <h2>{title.to_string()}</h2>
            <p>{subtitle.to_string()}</p>
        </div>
    }
}

fn render_benefits() -> Html {
    html! {
        <section id={Section::Beneficios.anchor()} class="page-section surface">
            <div class="container">
                { section_heading("Beneficios Únicos", "Descubre por qué miles de personas han elegido Cúrcuma Care de Seranova") }
                <div class="grid grid-3">
                    { for BENEFITS.iter().map(|benefit| html! {
                        <div class="card benefit-card">
                            <i class={classes!(benefit.icon, benefit.accent, "benefit-icon")}></i>
                            <h3>{benefit.title}</h3>
                            <p>{benefit.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_ingredients() -> Html {
    html! {
        <section id={Section::Ingredientes.anchor()} class="page-section tinted-green">
            <div class="container">
                { section_heading("Ingredientes Naturales", "Transparencia total en nuestra fórmula") }
                <div class="centered">
                    <img
                        src={config::INGREDIENTS_LABEL_IMAGE}
                        alt="Ingredientes: Glicerina, Cúrcuma, Aceite esencial árbol de té"
                        width="400"
                        height="400"
                        class="round shadow"
                    />
                </div>
                <div class="grid grid-3 narrow">
                    { for INGREDIENTS.iter().map(|ingredient| html! {
                        <div class="ingredient">
                            <h3>{ingredient.name}</h3>
                            <p>{ingredient.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_product(product: &Product) -> Html {
    let price = html! {
        <div class="price">{products::format_price(product.price_cents)}</div>
    };
    let pricing = match product.savings_cents() {
        Some(saved) => html! {
            <div class="pricing">
                <span class="list-price">{products::format_price(product.list_price_cents())}</span>
                {price}
                <span class="savings">{format!("¡Ahorra {}!", products::format_price(saved))}</span>
            </div>
        },
        None => price,
    };

    html! {
        <div class={classes!("card", "product-card", product.featured.then_some("featured"))}>
            if product.featured {
                <div class="badge">{products::FEATURED_BADGE}</div>
            }
            <div>
                <img src={product.image} alt={product.alt} class="product-image" />
                <h3>{product.title}</h3>
                <p>{product.blurb}</p>
                {pricing}
            </div>
            <a
                href={product.purchase_url()}
                target="_blank"
                rel="noopener noreferrer"
                class="button button-block"
            >
                <i class="fas fa-cart-shopping"></i>
                {product.cta}
            </a>
        </div>
    }
}

fn render_products() -> Html {
    html! {
        <section id={Section::Comprar.anchor()} class="page-section tinted-orange">
            <div class="container">
                { section_heading("Elige tu Presentación", "Opciones perfectas para cada necesidad") }
                <div class="grid grid-2 narrow">
                    { for PRODUCTS.iter().map(render_product) }
                </div>
            </div>
        </section>
    }
}

fn render_gallery() -> Html {
    html! {
        <section id={Section::Galeria.anchor()} class="page-section surface">
            <div class="container">
                { section_heading("Galería del Producto", "Ve Cúrcuma Care en acción") }
                <div class="grid grid-4">
                    { for GALLERY.iter().enumerate().map(|(index, file)| html! {
                        <div key={index} class="gallery-tile">
                            <img
                                src={catalog::gallery_image(file)}
                                alt={format!("Cúrcuma Care imagen {}", index)}
                                width="300"
                                height="300"
                            />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_testimonials() -> Html {
    html! {
        <section id={Section::Testimonios.anchor()} class="page-section tinted-orange">
            <div class="container">
                { section_heading("Lo que Dicen Nuestros Clientes", "Testimonios reales de personas satisfechas") }
                <div class="grid grid-3">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <div class="card testimonial-card">
                            <div class="testimonial-header">
                                <img src={testimonial.image()} alt={testimonial.name} width="60" height="60" class="round" />
                                <div>
                                    <h4>{testimonial.name}</h4>
                                    <div class="stars">
                                        { for (0..testimonial.stars()).map(|_| html! {
                                            <i class="fas fa-star"></i>
                                        }) }
                                    </div>
                                </div>
                            </div>
                            <p class="quote">{format!("\"{}\"", testimonial.comment)}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn render_faq() -> Html {
    html! {
        <section id={Section::Faq.anchor()} class="page-section surface">
            <div class="container narrow">
                { section_heading("Preguntas Frecuentes", "Resolvemos tus dudas más comunes") }
                <FaqAccordion />
            </div>
        </section>
    }
}

fn render_footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{format!(
                "© {} {} - Cúrcuma Care. Todos los derechos reservados.",
                catalog::COPYRIGHT_YEAR,
                catalog::BRAND
            )}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_state(|| Theme::Light);

    // Resolve the stored or system theme once mounted
    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                theme.set(theme::load(&BrowserThemeHost));
                || ()
            },
            (),
        );
    }

    // Follow a #section fragment present on first load
    use_effect_with_deps(
        move |_| {
            match dom::location_hash() {
                Ok(hash) => {
                    if let Some(section) = Section::from_hash(&hash) {
                        Timeout::new(config::DEEP_LINK_SCROLL_DELAY_MS, move || {
                            navigation::navigate(&BrowserScroller, section);
                        })
                        .forget();
                    }
                }
                Err(e) => log::debug!("Could not read location hash: {}", e),
            }
            || ()
        },
        (),
    );

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            theme.set(theme::toggle(&BrowserThemeHost, *theme));
        })
    };

    let on_navigate = Callback::from(|section: Section| {
        navigation::navigate(&BrowserScroller, section);
    });

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <NavMenu
                theme={*theme}
                on_navigate={on_navigate.clone()}
                on_toggle_theme={on_toggle_theme.clone()}
            />
            <NavMenu
                theme={*theme}
                compact=true
                on_navigate={on_navigate.clone()}
                on_toggle_theme={on_toggle_theme}
            />
            <main>
                <section id={Section::Inicio.anchor()} class="hero">
                    <div class="hero-content">
                        <div class="hero-copy">
                            <div class="logo-ring">
                                <div class="logo-disc">
                                    <img
                                        src={config::LOGO_IMAGE}
                                        alt="Cúrcuma Care - Jabón Natural"
                                        width="300"
                                        height="300"
                                        class="round"
                                    />
                                </div>
                                <div class="natural-badge">{"100% Natural"}</div>
                            </div>
                            <h1><span class="accent-orange">{"CÚRCUMA CARE"}</span></h1>
                            <p class="hero-subtitle">{"Jabón Natural de Cúrcuma"}</p>
                            <p class="hero-text">
                                {"Cuida tu piel con ingredientes 100% naturales: Glicerina, Cúrcuma y Aceite esencial de árbol de té. Descubre el poder de la naturaleza."}
                            </p>
                            <button
                                class="button hero-cta"
                                onclick={on_navigate.reform(|_: MouseEvent| Section::Comprar)}
                            >
                                {"Comprar Ahora"}
                            </button>
                        </div>
                        <VideoPlayer />
                    </div>
                </section>
                { render_benefits() }
                { render_ingredients() }
                { render_products() }
                { render_gallery() }
                { render_testimonials() }
                { render_faq() }
                { render_footer() }
            </main>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --bg: #fff7ed;
        --surface: #ffffff;
        --text: #1f2937;
        --muted: #4b5563;
        --orange: #ea580c;
        --orange-dark: #c2410c;
        --green: #16a34a;
        --green-bg: #f0fdf4;
        --border: #fed7aa;
    }
    html.dark {
        --bg: #111827;
        --surface: #1f2937;
        --text: #ffffff;
        --muted: #d1d5db;
        --orange: #f97316;
        --green: #22c55e;
        --green-bg: #111827;
        --border: #374151;
    }
    body {
        margin: 0;
        font-family: system-ui, sans-serif;
        background: var(--bg);
        color: var(--text);
        transition: background-color 0.3s, color 0.3s;
    }
    .landing-page main {
        padding-bottom: 5rem;
    }
    .accent-orange { color: var(--orange); }
    .accent-green { color: var(--green); }
    .round { border-radius: 50%; }
    .shadow { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
    .centered { display: flex; justify-content: center; }

    .section-nav { position: fixed; z-index: 40; }
    .section-nav-side {
        left: 1rem;
        top: 50%;
        transform: translateY(-50%);
    }
    .section-nav-mobile {
        bottom: 1rem;
        left: 50%;
        transform: translateX(-50%);
        display: none;
    }
    .nav-panel {
        background: var(--surface);
        opacity: 0.95;
        border: 1px solid var(--border);
        border-radius: 1rem;
        padding: 0.75rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .nav-list { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
    .nav-list-row { flex-direction: row; gap: 0.5rem; }
    .nav-button {
        position: relative;
        width: 3rem;
        height: 3rem;
        border: none;
        border-radius: 0.75rem;
        background: transparent;
        color: var(--muted);
        cursor: pointer;
        font-size: 1.1rem;
    }
    .nav-button:hover { color: var(--orange); background: var(--bg); }
    .nav-tooltip {
        position: absolute;
        left: 4rem;
        top: 50%;
        transform: translateY(-50%);
        background: #1f2937;
        color: #fff;
        padding: 0.25rem 0.75rem;
        border-radius: 0.5rem;
        font-size: 0.875rem;
        white-space: nowrap;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.2s;
    }
    .nav-list-row .nav-tooltip { left: 50%; top: auto; bottom: 3rem; transform: translateX(-50%); font-size: 0.75rem; }
    .nav-button:hover .nav-tooltip { opacity: 1; }
    @media (max-width: 1023px) {
        .section-nav-side { display: none; }
        .section-nav-mobile { display: block; }
        .nav-button { width: 2.5rem; height: 2.5rem; }
    }

    .hero { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 4rem 1rem; }
    .hero-content { max-width: 72rem; display: flex; gap: 3rem; align-items: center; }
    .hero-copy { text-align: left; }
    .hero h1 { font-size: 3.75rem; margin: 0 0 1.5rem; }
    .hero-subtitle { font-size: 1.25rem; color: var(--muted); }
    .hero-text { font-size: 1.125rem; color: var(--muted); max-width: 32rem; margin-bottom: 2rem; }
    .logo-ring {
        position: relative;
        width: 24rem;
        height: 24rem;
        margin: 0 auto 2rem;
        border-radius: 50%;
        background: linear-gradient(135deg, #fb923c, #ea580c);
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .logo-disc { width: 20rem; height: 20rem; border-radius: 50%; background: #fff; display: flex; align-items: center; justify-content: center; }
    .natural-badge { position: absolute; top: -1rem; right: -1rem; background: var(--green); color: #fff; padding: 0.5rem 1rem; border-radius: 9999px; font-weight: 600; }
    @media (max-width: 1023px) {
        .hero-content { flex-direction: column; }
        .hero-copy { text-align: center; }
        .hero h1 { font-size: 2.25rem; }
    }

    .button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        background: var(--orange);
        color: #fff;
        border: none;
        border-radius: 9999px;
        padding: 1rem 2rem;
        font-size: 1.125rem;
        text-decoration: none;
        cursor: pointer;
        transition: transform 0.2s, background 0.2s;
    }
    .button:hover { background: var(--orange-dark); transform: scale(1.05); }
    .button-block { width: 100%; box-sizing: border-box; }

    .video-frame { position: relative; overflow: hidden; border-radius: 0.375rem; height: 40rem; }
    .presentation-video { width: 100%; height: 100%; object-fit: cover; border-radius: 0.375rem; }
    .video-controls { position: absolute; top: 0.5rem; right: 0.5rem; display: flex; gap: 0.25rem; }
    .video-control { border: none; border-radius: 9999px; background: rgba(0, 0, 0, 0.5); color: #fff; padding: 0.5rem; width: 2.25rem; height: 2.25rem; cursor: pointer; }

    .page-section { padding: 5rem 0; }
    .surface { background: var(--surface); }
    .tinted-orange { background: var(--bg); }
    .tinted-green { background: var(--green-bg); }
    .container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
    .narrow { max-width: 56rem; margin-left: auto; margin-right: auto; }
    .section-heading { text-align: center; margin-bottom: 4rem; }
    .section-heading h2 { font-size: 2.25rem; margin: 0 0 1rem; }
    .section-heading p { font-size: 1.25rem; color: var(--muted); }
    .grid { display: grid; gap: 2rem; }
    .grid-2 { grid-template-columns: repeat(2, 1fr); }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
    .grid-4 { grid-template-columns: repeat(4, 1fr); gap: 1rem; }
    @media (max-width: 767px) {
        .grid-2, .grid-3 { grid-template-columns: 1fr; }
        .grid-4 { grid-template-columns: repeat(2, 1fr); }
    }

    .card {
        position: relative;
        overflow: hidden;
        background: var(--surface);
        border: 1px solid var(--border);
        border-radius: 0.75rem;
        padding: 2rem;
        transition: box-shadow 0.3s;
    }
    .card:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .card p { color: var(--muted); }
    .benefit-card { text-align: center; background: var(--bg); border: none; }
    .benefit-icon { font-size: 2rem; margin-bottom: 1rem; }
    .ingredient { text-align: center; margin-top: 3rem; }
    .ingredient p { color: var(--muted); }

    .product-card { text-align: center; display: flex; flex-direction: column; justify-content: space-between; }
    .product-card.featured { border: 2px solid var(--orange); }
    .product-image { width: 200px; height: 200px; object-fit: contain; margin: 0 auto 1.5rem; border-radius: 0.5rem; }
    .badge { position: absolute; top: 1rem; right: 1rem; background: var(--orange); color: #fff; padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.875rem; font-weight: 600; }
    .price { font-size: 1.875rem; font-weight: 700; color: var(--orange); margin-bottom: 1.5rem; }
    .pricing .price { margin-bottom: 0; }
    .pricing { margin-bottom: 1.5rem; }
    .list-price { color: var(--muted); text-decoration: line-through; }
    .savings { color: var(--green); font-weight: 600; }

    .gallery-tile { aspect-ratio: 1; overflow: hidden; border-radius: 0.5rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .gallery-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.3s; }
    .gallery-tile img:hover { transform: scale(1.05); }

    .testimonial-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
    .testimonial-header h4 { margin: 0; }
    .stars { color: #fb923c; font-size: 0.875rem; }
    .quote { font-style: italic; }

    .faq-list { display: flex; flex-direction: column; gap: 1rem; }
    .faq-card { padding: 0; }
    .faq-question {
        width: 100%;
        padding: 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        background: transparent;
        border: none;
        color: var(--text);
        text-align: left;
        cursor: pointer;
    }
    .faq-question:hover { background: var(--bg); }
    .faq-question h3 { font-size: 1.125rem; margin: 0; }
    .faq-answer { padding: 0 1.5rem 1.5rem; }

    .site-footer { background: #1f2937; color: #9ca3af; text-align: center; padding: 2rem 1rem 3rem; border-top: 1px solid #374151; }
"#;
