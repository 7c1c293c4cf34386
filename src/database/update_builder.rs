// Small UPDATE statement builder on top of sqlx::QueryBuilder.
// Each value is bound in the same call that writes its clause, so the
// placeholder numbering always follows the clause order.

use sqlx::{Encode, Postgres, QueryBuilder, Type};

pub struct UpdateBuilder<'args> {
    builder: QueryBuilder<'args, Postgres>,
    assignments: usize,
}

impl<'args> UpdateBuilder<'args> {
    pub fn new(table: &str) -> Self {
        Self {
            builder: QueryBuilder::new(format!("UPDATE {table} SET ")),
            assignments: 0,
        }
    }

    /// Appends `column = $n`
    pub fn set<T>(mut self, column: &str, value: T) -> Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        if self.assignments > 0 {
            self.builder.push(", ");
        }
        self.builder.push(column).push(" = ").push_bind(value);
        self.assignments += 1;
        self
    }

    /// Appends `column = $n` only when a value is supplied
    pub fn set_if_some<T>(self, column: &str, value: Option<T>) -> Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        match value {
            Some(value) => self.set(column, value),
            None => self,
        }
    }

    /// Closes the statement with `WHERE column = $n`
    pub fn where_eq<T>(mut self, column: &str, value: T) -> QueryBuilder<'args, Postgres>
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres>,
    {
        self.builder.push(" WHERE ").push(column).push(" = ").push_bind(value);
        self.builder
    }
}
