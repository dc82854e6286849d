use serde::{Deserialize, Serialize};

use super::aggregate::Pokemon;

/// Размер страницы списка
pub const PAGE_SIZE: usize = 20;

/// Total size of the catalog. The dataset is static, so the count is known
/// up front and is never taken from a listing response.
pub const POKEMON_TOTAL_COUNT: usize = 160;

/// Ответ `GET /api/pokemon/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    pub items: Vec<Pokemon>,
    pub limit: usize,
    pub offset: usize,
}

/// Offset of a 1-based page. Saturates for pages far past the end.
pub fn page_offset(page: usize, page_size: usize) -> usize {
    page.max(1).saturating_sub(1).saturating_mul(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, PAGE_SIZE), 0);
        assert_eq!(page_offset(3, PAGE_SIZE), 40);
        assert_eq!(page_offset(0, PAGE_SIZE), 0);
    }

    #[test]
    fn test_page_offset_huge_page() {
        assert_eq!(page_offset(usize::MAX, PAGE_SIZE), usize::MAX);
        assert_eq!(page_offset(usize::MAX / 2, PAGE_SIZE), usize::MAX);
    }
}
