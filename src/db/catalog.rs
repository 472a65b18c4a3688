//! The fixed catalog of search operations.
//!
//! Each operation is a variant of [`Operation`] carrying its typed
//! parameters, so arity mismatches are unrepresentable. The SQL templates
//! use positional `$n` placeholders and are never interpolated with user
//! input; values go through the driver's parameter binding.
//!
//! Columns that would not land in the supported [`Value`](super::rows::Value)
//! set are cast in the statement itself (`release_year::int`,
//! `rental_rate::float8`, `rating::text`).

use postgres::types::ToSql;

use crate::error::{Result, SearchError};

const CATEGORY_LIST: &str = r#"
SELECT category_id AS "Nr",
       name AS category
FROM category
ORDER BY category_id
"#;

const YEAR_LIST: &str = r#"
SELECT DISTINCT f.release_year::int AS year
FROM film f
    JOIN film_category fc ON f.film_id = fc.film_id
    JOIN category c ON fc.category_id = c.category_id
WHERE c.name = $1
ORDER BY year
"#;

const ACTOR_LIST: &str = r#"
SELECT actor_id AS "FID",
       last_name AS "LastName",
       first_name AS "FirstName"
FROM actor
ORDER BY last_name
"#;

const FILM_BY_CATEGORY_AND_YEAR: &str = r#"
SELECT f.title AS title,
       f.description AS description,
       string_agg(a.first_name || ' ' || a.last_name, ', ' ORDER BY a.last_name) AS actors
FROM category c
    LEFT JOIN film_category fc ON c.category_id = fc.category_id
    LEFT JOIN film f ON fc.film_id = f.film_id
    JOIN film_actor fa ON f.film_id = fa.film_id
    JOIN actor a ON fa.actor_id = a.actor_id
WHERE c.name = $1 AND f.release_year::int = $2
GROUP BY f.title,
         f.description
"#;

const FILM_BY_ACTOR: &str = r#"
SELECT f.film_id AS fid,
       f.title AS title,
       f.release_year::int AS year,
       c.name AS category,
       f.description AS description
FROM category c
    LEFT JOIN film_category fc ON c.category_id = fc.category_id
    LEFT JOIN film f ON fc.film_id = f.film_id
    JOIN film_actor fa ON f.film_id = fa.film_id
    JOIN actor a ON fa.actor_id = a.actor_id
WHERE fa.actor_id = $1
GROUP BY f.film_id,
         f.title,
         f.release_year,
         c.name,
         f.description
ORDER BY c.name, f.release_year
"#;

const FILM_BY_KEYWORD_BOTH: &str = r#"
SELECT f.title AS title,
       f.release_year::int AS year,
       c.name AS category,
       f.description AS description,
       string_agg(a.last_name || ' ' || a.first_name, ', ' ORDER BY a.last_name) AS actors,
       f.rental_rate::float8 AS price,
       f.length AS length,
       f.rating::text AS rating,
       CASE f.rating::text
           WHEN 'G' THEN 'General Audiences - All ages admitted'
           WHEN 'PG' THEN 'Parental Guidance Suggested - Some material may not be suitable for children'
           WHEN 'PG-13' THEN 'Parents Strongly Cautioned - Some material may be inappropriate for children under 13'
           WHEN 'R' THEN 'Restricted - Under 17 requires accompanying parent or adult guardian'
           WHEN 'NC-17' THEN 'Adults Only - No one 17 and under admitted'
           ELSE 'Not Rated'
       END AS rating_description
FROM category c
    LEFT JOIN film_category fc ON c.category_id = fc.category_id
    LEFT JOIN film f ON fc.film_id = f.film_id
    JOIN film_actor fa ON f.film_id = fa.film_id
    JOIN actor a ON fa.actor_id = a.actor_id
WHERE f.title LIKE $1 OR f.description LIKE $2
GROUP BY f.title, f.release_year, c.name, f.description, f.rental_rate, f.length, f.rating
ORDER BY category, year
"#;

const FILM_BY_KEYWORD_IN_TITLE: &str = r#"
SELECT f.title AS title,
       f.release_year::int AS year,
       c.name AS category,
       f.description AS description,
       string_agg(a.last_name || ' ' || a.first_name, ', ' ORDER BY a.last_name) AS actors,
       f.rental_rate::float8 AS price,
       f.length AS length,
       f.rating::text AS rating,
       CASE f.rating::text
           WHEN 'G' THEN 'General Audiences - All ages admitted'
           WHEN 'PG' THEN 'Parental Guidance Suggested - Some material may not be suitable for children'
           WHEN 'PG-13' THEN 'Parents Strongly Cautioned - Some material may be inappropriate for children under 13'
           WHEN 'R' THEN 'Restricted - Under 17 requires accompanying parent or adult guardian'
           WHEN 'NC-17' THEN 'Adults Only - No one 17 and under admitted'
           ELSE 'Not Rated'
       END AS rating_description
FROM category c
    LEFT JOIN film_category fc ON c.category_id = fc.category_id
    LEFT JOIN film f ON fc.film_id = f.film_id
    JOIN film_actor fa ON f.film_id = fa.film_id
    JOIN actor a ON fa.actor_id = a.actor_id
WHERE f.title LIKE $1
GROUP BY f.title, f.release_year, c.name, f.description, f.rental_rate, f.length, f.rating
ORDER BY category, year
"#;

const FILM_BY_KEYWORD_IN_DESCRIPTION: &str = r#"
SELECT f.title AS title,
       f.release_year::int AS year,
       c.name AS category,
       f.description AS description,
       string_agg(a.last_name || ' ' || a.first_name, ', ' ORDER BY a.last_name) AS actors,
       f.rental_rate::float8 AS price,
       f.length AS length,
       f.rating::text AS rating,
       CASE f.rating::text
           WHEN 'G' THEN 'General Audiences - All ages admitted'
           WHEN 'PG' THEN 'Parental Guidance Suggested - Some material may not be suitable for children'
           WHEN 'PG-13' THEN 'Parents Strongly Cautioned - Some material may be inappropriate for children under 13'
           WHEN 'R' THEN 'Restricted - Under 17 requires accompanying parent or adult guardian'
           WHEN 'NC-17' THEN 'Adults Only - No one 17 and under admitted'
           ELSE 'Not Rated'
       END AS rating_description
FROM category c
    LEFT JOIN film_category fc ON c.category_id = fc.category_id
    LEFT JOIN film f ON fc.film_id = f.film_id
    JOIN film_actor fa ON f.film_id = fa.film_id
    JOIN actor a ON fa.actor_id = a.actor_id
WHERE f.description LIKE $1
GROUP BY f.title, f.release_year, c.name, f.description, f.rental_rate, f.length, f.rating
ORDER BY category, year
"#;

const SHOW_POPULAR_QUERIES: &str = r#"
SELECT type_query AS "Query type",
       text_query AS "Query text",
       count AS "Frequency"
FROM popular_query
ORDER BY count DESC
"#;

/// A search operation together with its bound parameters.
///
/// The variant payloads are the parameter-arity contract: an operation
/// cannot be constructed with the wrong number or type of arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    CategoryList,
    YearList { category: String },
    ActorList,
    FilmByCategoryAndYear { category: String, year: i32 },
    FilmByActor { actor_id: i32 },
    FilmByKeywordBoth { pattern: String },
    FilmByKeywordInTitle { pattern: String },
    FilmByKeywordInDescription { pattern: String },
    ShowPopularQueries,
}

impl Operation {
    /// Symbolic name, as used by [`resolve`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::CategoryList => "category_list",
            Self::YearList { .. } => "year_list",
            Self::ActorList => "actor_list",
            Self::FilmByCategoryAndYear { .. } => "film_by_category_and_year",
            Self::FilmByActor { .. } => "film_by_actor",
            Self::FilmByKeywordBoth { .. } => "film_by_keyword_both",
            Self::FilmByKeywordInTitle { .. } => "film_by_keyword_in_film_title",
            Self::FilmByKeywordInDescription { .. } => "film_by_keyword_in_film_description",
            Self::ShowPopularQueries => "show_popular_queries",
        }
    }

    /// The SQL template this operation executes.
    pub fn statement(&self) -> &'static str {
        match self {
            Self::CategoryList => CATEGORY_LIST,
            Self::YearList { .. } => YEAR_LIST,
            Self::ActorList => ACTOR_LIST,
            Self::FilmByCategoryAndYear { .. } => FILM_BY_CATEGORY_AND_YEAR,
            Self::FilmByActor { .. } => FILM_BY_ACTOR,
            Self::FilmByKeywordBoth { .. } => FILM_BY_KEYWORD_BOTH,
            Self::FilmByKeywordInTitle { .. } => FILM_BY_KEYWORD_IN_TITLE,
            Self::FilmByKeywordInDescription { .. } => FILM_BY_KEYWORD_IN_DESCRIPTION,
            Self::ShowPopularQueries => SHOW_POPULAR_QUERIES,
        }
    }

    /// Number of positional placeholders in the statement.
    pub fn arity(&self) -> usize {
        match self {
            Self::CategoryList | Self::ActorList | Self::ShowPopularQueries => 0,
            Self::YearList { .. }
            | Self::FilmByActor { .. }
            | Self::FilmByKeywordInTitle { .. }
            | Self::FilmByKeywordInDescription { .. } => 1,
            Self::FilmByCategoryAndYear { .. } | Self::FilmByKeywordBoth { .. } => 2,
        }
    }

    /// Parameters in placeholder order, ready for positional binding.
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        match self {
            Self::CategoryList | Self::ActorList | Self::ShowPopularQueries => Vec::new(),
            Self::YearList { category } => vec![category as &(dyn ToSql + Sync)],
            Self::FilmByCategoryAndYear { category, year } => {
                vec![category as &(dyn ToSql + Sync), year]
            }
            Self::FilmByActor { actor_id } => vec![actor_id as &(dyn ToSql + Sync)],
            // The pattern is bound to both placeholders; the template keeps
            // two so the documented arity matches the statement.
            Self::FilmByKeywordBoth { pattern } => {
                vec![pattern as &(dyn ToSql + Sync), pattern]
            }
            Self::FilmByKeywordInTitle { pattern }
            | Self::FilmByKeywordInDescription { pattern } => {
                vec![pattern as &(dyn ToSql + Sync)]
            }
        }
    }
}

/// Look up the SQL template for a symbolic operation name.
///
/// A pure lookup with no side effects; an unrecognized name is a
/// [`SearchError::Catalog`] and nothing executes.
pub fn resolve(name: &str) -> Result<&'static str> {
    match name {
        "category_list" => Ok(CATEGORY_LIST),
        "year_list" => Ok(YEAR_LIST),
        "actor_list" => Ok(ACTOR_LIST),
        "film_by_category_and_year" => Ok(FILM_BY_CATEGORY_AND_YEAR),
        "film_by_actor" => Ok(FILM_BY_ACTOR),
        "film_by_keyword_both" => Ok(FILM_BY_KEYWORD_BOTH),
        "film_by_keyword_in_film_title" => Ok(FILM_BY_KEYWORD_IN_TITLE),
        "film_by_keyword_in_film_description" => Ok(FILM_BY_KEYWORD_IN_DESCRIPTION),
        "show_popular_queries" => Ok(SHOW_POPULAR_QUERIES),
        _ => Err(SearchError::Catalog {
            name: name.to_string(),
        }),
    }
}
