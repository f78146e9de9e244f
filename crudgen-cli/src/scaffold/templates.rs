//! Laravel artifact templates
//!
//! Rendered with minijinja (`trim_blocks` and `lstrip_blocks` enabled, no
//! auto-escaping). Every template receives the same context:
//!
//! - `names` - [`ResourceNames`](super::helpers::ResourceNames)
//! - `fields` - `name`, `column_type`, `nullable`, `store_rule`, `update_rule`, `fake`
//! - `fillable` - quoted, comma separated field names
//! - `foreign_keys` - columns added for `belongsTo` relations
//! - `relations` - `method`, `kind`, `model` for handled relations
//! - `per_page`, `seed_count`

/// Schema migration (`database/migrations`)
pub const MIGRATION_TEMPLATE: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up()
    {
        Schema::create('{{ names.table }}', function (Blueprint $table) {
            $table->id();
{% for field in fields %}
            $table->{{ field.column_type }}('{{ field.name }}'){% if field.nullable %}->nullable(){% endif %};
{% endfor %}
{% for foreign_key in foreign_keys %}
            $table->foreignId('{{ foreign_key }}')->constrained()->onDelete('cascade');
{% endfor %}
            $table->timestamps();
        });
    }

    public function down()
    {
        Schema::dropIfExists('{{ names.table }}');
    }
};
"#;

/// Eloquent model (`app/Models`)
pub const MODEL_TEMPLATE: &str = r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;

class {{ names.class }} extends Model
{
    use HasFactory;

    protected $fillable = [{{ fillable }}];

    protected $casts = [
        'created_at' => 'datetime',
        'updated_at' => 'datetime',
    ];
{% for relation in relations %}

    public function {{ relation.method }}()
    {
        return $this->{{ relation.kind }}({{ relation.model }}::class);
    }
{% endfor %}
}
"#;

/// API controller (`app/Http/Controllers/Api`)
pub const CONTROLLER_TEMPLATE: &str = r#"<?php

namespace App\Http\Controllers\Api;

use App\Http\Controllers\Controller;
use App\Models\{{ names.class }};
use App\Http\Requests\{{ names.class }}\Store{{ names.class }}Request;
use App\Http\Requests\{{ names.class }}\Update{{ names.class }}Request;
use App\Http\Resources\{{ names.class }}Resource;
use Illuminate\Http\Request;
use Illuminate\Http\JsonResponse;

class {{ names.class }}Controller extends Controller
{
    public function index(Request $request): JsonResponse
    {
        ${{ names.camel_plural }} = {{ names.class }}::query()
            ->when($request->search, function ($query, $search) {
                $query->where('name', 'like', "%{$search}%");
            })
            ->when($request->sort_by, function ($query, $sortBy) use ($request) {
                $direction = $request->sort_direction ?? 'asc';
                $query->orderBy($sortBy, $direction);
            })
            ->paginate($request->per_page ?? {{ per_page }});

        return response()->json([
            'success' => true,
            'data' => {{ names.class }}Resource::collection(${{ names.camel_plural }}->items()),
            'meta' => [
                'current_page' => ${{ names.camel_plural }}->currentPage(),
                'last_page' => ${{ names.camel_plural }}->lastPage(),
                'per_page' => ${{ names.camel_plural }}->perPage(),
                'total' => ${{ names.camel_plural }}->total(),
            ]
        ]);
    }

    public function store(Store{{ names.class }}Request $request): JsonResponse
    {
        ${{ names.camel }} = {{ names.class }}::create($request->validated());

        return response()->json([
            'success' => true,
            'message' => '{{ names.class }} created successfully',
            'data' => new {{ names.class }}Resource(${{ names.camel }})
        ], 201);
    }

    public function show({{ names.class }} ${{ names.camel }}): JsonResponse
    {
        return response()->json([
            'success' => true,
            'data' => new {{ names.class }}Resource(${{ names.camel }})
        ]);
    }

    public function update(Update{{ names.class }}Request $request, {{ names.class }} ${{ names.camel }}): JsonResponse
    {
        ${{ names.camel }}->update($request->validated());

        return response()->json([
            'success' => true,
            'message' => '{{ names.class }} updated successfully',
            'data' => new {{ names.class }}Resource(${{ names.camel }})
        ]);
    }

    public function destroy({{ names.class }} ${{ names.camel }}): JsonResponse
    {
        ${{ names.camel }}->delete();

        return response()->json([
            'success' => true,
            'message' => '{{ names.class }} deleted successfully'
        ]);
    }
}
"#;

/// Form request for creation (`app/Http/Requests/{Class}`)
pub const STORE_REQUEST_TEMPLATE: &str = r#"<?php

namespace App\Http\Requests\{{ names.class }};

use Illuminate\Foundation\Http\FormRequest;

class Store{{ names.class }}Request extends FormRequest
{
    public function authorize()
    {
        return true;
    }

    public function rules()
    {
        return [
{% for field in fields %}
            '{{ field.name }}' => '{{ field.store_rule }}',
{% endfor %}
        ];
    }

    public function messages()
    {
        return [
            // Add custom messages here
        ];
    }
}
"#;

/// Form request for partial updates (`app/Http/Requests/{Class}`)
pub const UPDATE_REQUEST_TEMPLATE: &str = r#"<?php

namespace App\Http\Requests\{{ names.class }};

use Illuminate\Foundation\Http\FormRequest;

class Update{{ names.class }}Request extends FormRequest
{
    public function authorize()
    {
        return true;
    }

    public function rules()
    {
        return [
{% for field in fields %}
            '{{ field.name }}' => '{{ field.update_rule }}',
{% endfor %}
        ];
    }
}
"#;

/// JSON resource (`app/Http/Resources`)
///
/// Declared fields are intentionally left out; the output only exposes the
/// key and timestamps until it is edited by hand.
pub const RESOURCE_TEMPLATE: &str = r#"<?php

namespace App\Http\Resources;

use Illuminate\Http\Resources\Json\JsonResource;

class {{ names.class }}Resource extends JsonResource
{
    public function toArray($request)
    {
        return [
            'id' => $this->id,
            // Add your fields here
            'created_at' => $this->created_at,
            'updated_at' => $this->updated_at,
        ];
    }
}
"#;

/// Route file (`routes/api`)
pub const ROUTES_TEMPLATE: &str = r#"<?php

use App\Http\Controllers\Api\{{ names.class }}Controller;
use Illuminate\Support\Facades\Route;

Route::apiResource('{{ names.kebab_plural }}', {{ names.class }}Controller::class);

// Additional routes
// Route::get('{{ names.kebab_plural }}/search', [{{ names.class }}Controller::class, 'search']);
// Route::post('{{ names.kebab_plural }}/bulk-delete', [{{ names.class }}Controller::class, 'bulkDelete']);
"#;

/// Model factory (`database/factories`)
pub const FACTORY_TEMPLATE: &str = r#"<?php

namespace Database\Factories;

use App\Models\{{ names.class }};
use Illuminate\Database\Eloquent\Factories\Factory;

class {{ names.class }}Factory extends Factory
{
    protected $model = {{ names.class }}::class;

    public function definition()
    {
        return [
{% for field in fields %}
            '{{ field.name }}' => {{ field.fake }},
{% endfor %}
        ];
    }
}
"#;

/// Database seeder (`database/seeders`)
pub const SEEDER_TEMPLATE: &str = r#"<?php

namespace Database\Seeders;

use App\Models\{{ names.class }};
use Illuminate\Database\Seeder;

class {{ names.class }}Seeder extends Seeder
{
    public function run()
    {
        {{ names.class }}::factory()->count({{ seed_count }})->create();
    }
}
"#;

/// Feature test (`tests/Feature/{Class}`)
pub const TEST_TEMPLATE: &str = r#"<?php

namespace Tests\Feature\{{ names.class }};

use App\Models\{{ names.class }};
use Illuminate\Foundation\Testing\RefreshDatabase;
use Tests\TestCase;

class {{ names.class }}ApiTest extends TestCase
{
    use RefreshDatabase;

    public function test_can_list_{{ names.camel_plural }}()
    {
        {{ names.class }}::factory()->count(5)->create();

        $response = $this->getJson('/api/{{ names.kebab_plural }}');

        $response->assertStatus(200)
                ->assertJsonStructure([
                    'success',
                    'data' => [
                        '*' => ['id']
                    ],
                    'meta'
                ]);
    }

    public function test_can_create_{{ names.camel }}()
    {
        $data = {{ names.class }}::factory()->make()->toArray();

        $response = $this->postJson('/api/{{ names.kebab_plural }}', $data);

        $response->assertStatus(201)
                ->assertJsonStructure([
                    'success',
                    'message',
                    'data' => ['id']
                ]);

        $this->assertDatabaseHas('{{ names.table }}', $data);
    }

    public function test_can_show_{{ names.camel }}()
    {
        ${{ names.camel }} = {{ names.class }}::factory()->create();

        $response = $this->getJson("/api/{{ names.kebab_plural }}/{${{ names.camel }}->id}");

        $response->assertStatus(200)
                ->assertJsonStructure([
                    'success',
                    'data' => ['id']
                ]);
    }

    public function test_can_update_{{ names.camel }}()
    {
        ${{ names.camel }} = {{ names.class }}::factory()->create();
        $updateData = {{ names.class }}::factory()->make()->toArray();

        $response = $this->putJson("/api/{{ names.kebab_plural }}/{${{ names.camel }}->id}", $updateData);

        $response->assertStatus(200)
                ->assertJsonStructure([
                    'success',
                    'message',
                    'data' => ['id']
                ]);
    }

    public function test_can_delete_{{ names.camel }}()
    {
        ${{ names.camel }} = {{ names.class }}::factory()->create();

        $response = $this->deleteJson("/api/{{ names.kebab_plural }}/{${{ names.camel }}->id}");

        $response->assertStatus(200)
                ->assertJson([
                    'success' => true,
                    'message' => '{{ names.class }} deleted successfully'
                ]);

        $this->assertDatabaseMissing('{{ names.table }}', ['id' => ${{ names.camel }}->id]);
    }
}
"#;
