//! Placeholder rows loaded by the seed endpoint.
use chrono::NaiveDate;
use uuid::Uuid;

/// Namespace for deriving stable invoice ids from their contents.
const INVOICE_NAMESPACE: Uuid = Uuid::from_u128(0x8f3c_2a71_5d4e_4b0a_9c61_7e2f_03b4_d5a6);

pub struct PlaceholderUser {
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub struct PlaceholderCustomer {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

pub struct PlaceholderInvoice {
    pub customer_id: Uuid,
    /// In cents.
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: &'static str,
}

impl PlaceholderInvoice {
    pub fn date(&self) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d")
    }

    /// Same contents, same id; re-seeding hits `ON CONFLICT (id)`.
    pub fn id(&self) -> Uuid {
        let key = format!(
            "{}/{}/{}/{}",
            self.customer_id,
            self.date,
            self.amount,
            self.status.as_str()
        );
        Uuid::new_v5(&INVOICE_NAMESPACE, key.as_bytes())
    }
}

pub struct PlaceholderRevenue {
    pub month: &'static str,
    pub revenue: i32,
}

const EVIL_RABBIT: Uuid = Uuid::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81aa);
const DELBA_DE_OLIVEIRA: Uuid = Uuid::from_u128(0x3958dc9e_712f_4377_85e9_fec4b6a6442a);
const LEE_ROBINSON: Uuid = Uuid::from_u128(0x3958dc9e_742f_4377_85e9_fec4b6a6442a);
const MICHAEL_NOVOTNY: Uuid = Uuid::from_u128(0x76d65c26_f784_44a2_ac19_586678f7c2f2);
const AMY_BURNS: Uuid = Uuid::from_u128(0xcc27c14a_0acf_4f4a_a6c9_d45682c144b9);
const BALAZS_ORBAN: Uuid = Uuid::from_u128(0x13d07535_c59e_4157_a011_f8d2ef4e0cbb);

pub const USERS: &[PlaceholderUser] = &[PlaceholderUser {
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
}];

pub const CUSTOMERS: &[PlaceholderCustomer] = &[
    PlaceholderCustomer {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    PlaceholderCustomer {
        id: DELBA_DE_OLIVEIRA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    PlaceholderCustomer {
        id: LEE_ROBINSON,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    PlaceholderCustomer {
        id: MICHAEL_NOVOTNY,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    PlaceholderCustomer {
        id: AMY_BURNS,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    PlaceholderCustomer {
        id: BALAZS_ORBAN,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

const fn invoice(
    customer_id: Uuid,
    amount: i32,
    status: InvoiceStatus,
    date: &'static str,
) -> PlaceholderInvoice {
    PlaceholderInvoice {
        customer_id,
        amount,
        status,
        date,
    }
}

pub const INVOICES: &[PlaceholderInvoice] = &[
    invoice(EVIL_RABBIT, 15795, InvoiceStatus::Pending, "2022-12-06"),
    invoice(DELBA_DE_OLIVEIRA, 20348, InvoiceStatus::Pending, "2022-11-14"),
    invoice(AMY_BURNS, 3040, InvoiceStatus::Paid, "2022-10-29"),
    invoice(MICHAEL_NOVOTNY, 44800, InvoiceStatus::Paid, "2023-09-10"),
    invoice(BALAZS_ORBAN, 34577, InvoiceStatus::Pending, "2023-08-05"),
    invoice(LEE_ROBINSON, 54246, InvoiceStatus::Pending, "2023-07-16"),
    invoice(EVIL_RABBIT, 666, InvoiceStatus::Pending, "2023-06-27"),
    invoice(MICHAEL_NOVOTNY, 32545, InvoiceStatus::Paid, "2023-06-09"),
    invoice(AMY_BURNS, 1250, InvoiceStatus::Paid, "2023-06-17"),
    invoice(BALAZS_ORBAN, 8546, InvoiceStatus::Paid, "2023-06-07"),
    invoice(DELBA_DE_OLIVEIRA, 500, InvoiceStatus::Paid, "2023-08-19"),
    invoice(BALAZS_ORBAN, 8945, InvoiceStatus::Paid, "2023-06-03"),
    invoice(LEE_ROBINSON, 1000, InvoiceStatus::Paid, "2022-06-05"),
];

pub const REVENUE: &[PlaceholderRevenue] = &[
    PlaceholderRevenue { month: "Jan", revenue: 2000 },
    PlaceholderRevenue { month: "Feb", revenue: 1800 },
    PlaceholderRevenue { month: "Mar", revenue: 2200 },
    PlaceholderRevenue { month: "Apr", revenue: 2500 },
    PlaceholderRevenue { month: "May", revenue: 2300 },
    PlaceholderRevenue { month: "Jun", revenue: 3200 },
    PlaceholderRevenue { month: "Jul", revenue: 3500 },
    PlaceholderRevenue { month: "Aug", revenue: 3700 },
    PlaceholderRevenue { month: "Sep", revenue: 2500 },
    PlaceholderRevenue { month: "Oct", revenue: 2800 },
    PlaceholderRevenue { month: "Nov", revenue: 3000 },
    PlaceholderRevenue { month: "Dec", revenue: 4800 },
];
