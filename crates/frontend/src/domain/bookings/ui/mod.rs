use crate::domain::bookings::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Toggle;
use crate::shared::i18n::use_i18n;
use contracts::domain::booking::{Booking, BookingAction, BookingStatus};
use contracts::shared::pagination::{PageQuery, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

fn status_key(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "booking_status.pending",
        BookingStatus::Accepted => "booking_status.accepted",
        BookingStatus::Rejected => "booking_status.rejected",
        BookingStatus::Cancelled => "booking_status.cancelled",
        BookingStatus::Completed => "booking_status.completed",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BookingsList() -> impl IntoView {
    let i18n = use_i18n();

    let (items, set_items) = signal::<Vec<Booking>>(Vec::new());
    let (total, set_total) = signal(0usize);
    let (total_pages, set_total_pages) = signal(0usize);
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(DEFAULT_PAGE_SIZE);
    let (error, set_error) = signal::<Option<String>>(None);
    let (booking_enabled, set_booking_enabled) = signal(true);

    let fetch = move || {
        let query = PageQuery {
            page: page.get_untracked() + 1,
            limit: page_size.get_untracked(),
        };
        spawn_local(async move {
            match api::fetch_bookings(query).await {
                Ok(result) => {
                    set_total.set(result.total);
                    set_total_pages.set(result.total_pages());
                    set_items.set(result.items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("bookings fetch failed: {}", e);
                    set_error.set(Some(format!("{}: {}", i18n.t("error.load_failed"), e)));
                }
            }
        });
    };

    let run_action = move |id: Uuid, action: BookingAction| {
        spawn_local(async move {
            match api::booking_action(id, action).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e))),
            }
        });
    };

    let toggle_booking_enabled = move |enabled: bool| {
        // optimistic flip, rolled back on failure
        set_booking_enabled.set(enabled);
        spawn_local(async move {
            if let Err(e) = api::set_booking_enabled(enabled).await {
                set_booking_enabled.set(!enabled);
                set_error.set(Some(format!("{}: {}", i18n.t("error.save_failed"), e)));
            }
        });
    };

    fetch();
    spawn_local(async move {
        match api::fetch_booking_enabled().await {
            Ok(enabled) => set_booking_enabled.set(enabled),
            Err(e) => log::error!("booking-enabled fetch failed: {}", e),
        }
    });

    view! {
        <div class="page">
            <PageHeader title=Signal::derive(move || i18n.t("bookings.title"))>
                <Toggle
                    label=Signal::derive(move || i18n.t("bookings.enabled"))
                    checked=booking_enabled
                    on_change=Callback::new(toggle_booking_enabled)
                />
            </PageHeader>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || i18n.t("bookings.customer")}</th>
                            <th class="table__header-cell">{move || i18n.t("bookings.phone")}</th>
                            <th class="table__header-cell">{move || i18n.t("avail.car")}</th>
                            <th class="table__header-cell">{move || i18n.t("bookings.dates")}</th>
                            <th class="table__header-cell">{move || i18n.t("bookings.total")}</th>
                            <th class="table__header-cell">{move || i18n.t("cars.status")}</th>
                            <th class="table__header-cell">{move || i18n.t("common.actions")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|booking| {
                            let id = booking.id;
                            let status = booking.status;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{booking.customer_name.clone()}</td>
                                    <td class="table__cell" dir="ltr">{booking.masked_phone()}</td>
                                    <td class="table__cell">{format!("#{}", booking.car_id)}</td>
                                    <td class="table__cell" dir="ltr">
                                        {format!("{} – {}", booking.date_from, booking.date_to)}
                                    </td>
                                    <td class="table__cell" dir="ltr">{format!("{:.3}", booking.total_price)}</td>
                                    <td class="table__cell">{i18n.t(status_key(status))}</td>
                                    <td class="table__cell">
                                        <Show when=move || status.allows(BookingAction::Accept)>
                                            <button
                                                class="button button--primary button--small"
                                                on:click=move |_| run_action(id, BookingAction::Accept)
                                            >
                                                {move || i18n.t("bookings.accept")}
                                            </button>
                                        </Show>
                                        <Show when=move || status.allows(BookingAction::Reject)>
                                            <button
                                                class="button button--secondary button--small"
                                                on:click=move |_| run_action(id, BookingAction::Reject)
                                            >
                                                {move || i18n.t("bookings.reject")}
                                            </button>
                                        </Show>
                                        <Show when=move || status.allows(BookingAction::Cancel)>
                                            <button
                                                class="button button--ghost button--small"
                                                on:click=move |_| run_action(id, BookingAction::Cancel)
                                            >
                                                {move || i18n.t("bookings.cancel")}
                                            </button>
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=page
                total_pages=total_pages
                total_count=total
                page_size=page_size
                on_page_change=Callback::new(move |p| {
                    set_page.set(p);
                    fetch();
                })
                on_page_size_change=Callback::new(move |size| {
                    set_page_size.set(size);
                    set_page.set(0);
                    fetch();
                })
            />
        </div>
    }
}
