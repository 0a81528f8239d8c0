/// One page of a listing along with the numbers a pager needs.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}
