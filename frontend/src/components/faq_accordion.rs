use yew::prelude::*;

use crate::content::catalog::FAQS;
use crate::state::faq::{Accordion, AccordionAction};

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
    let accordion = use_reducer(Accordion::default);

    html! {
        <div class="faq-list">
            { for FAQS.iter().enumerate().map(|(index, faq)| {
                let onclick = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: MouseEvent| {
                        accordion.dispatch(AccordionAction::Toggle(index));
                    })
                };
                html! {
                    <div key={index} class="card faq-card">
                        <button class="faq-question" {onclick}>
                            <h3>{faq.question}</h3>
                            <i class={classes!(accordion.chevron(index), "accent-orange")}></i>
                        </button>
                        if accordion.is_open(index) {
                            <div class="faq-answer">
                                <p>{faq.answer}</p>
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}
