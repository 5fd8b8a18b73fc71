use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fill level in percent.
    pub percent: u8,
}

#[function_component(UrgencyMeter)]
pub fn urgency_meter(props: &Props) -> Html {
    let percent = props.percent.min(100);
    html! {
        <div
            class="urgency-meter"
            role="meter"
            aria-label={crate::i18n::t("alert.meter")}
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={percent.to_string()}
        >
            <div class="urgency-fill" style={format!("width:{percent}%")}></div>
        </div>
    }
}
